//! `shell` command: an interactive editing session on stdin.
//!
//! Each input line is parsed as one editor command. Unlike the one-shot
//! commands, the shell keeps the selection and notice board alive between
//! commands and only writes the slot on `save`.

use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::cli::add::AddArgs;
use crate::cli::common::{resolve_id, CliContext, CliError, CliResult};
use crate::cli::delete::DeleteArgs;
use crate::cli::list::ListArgs;
use crate::cli::report::ReportArgs;
use crate::cli::reposition::MoveArgs;
use crate::cli::rotate::RotateArgs;
use crate::cli::scale::ScaleArgs;
use crate::cli::scene::SceneArgs;
use crate::cli::types::TypesArgs;
use crate::constants::APP_NAME;
use crate::services::Session;

/// Start an interactive session reading commands from stdin
#[derive(Debug, Clone, Args)]
pub struct ShellArgs {}

/// One line of shell input.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Add a module at the origin
    Add(AddArgs),
    /// Delete a module
    Delete(DeleteArgs),
    /// Move a module along one axis
    Move(MoveArgs),
    /// Rotate a module about one axis
    Rotate(RotateArgs),
    /// Rescale a module
    Scale(ScaleArgs),
    /// Select a module, or clear the selection when no id is given
    Select(SelectArgs),
    /// List placed modules
    List(ListArgs),
    /// Show mission metrics
    Report(ReportArgs),
    /// Show render nodes
    Scene(SceneArgs),
    /// List module types
    Types(TypesArgs),
    /// Show the current notice, if any
    Notice,
    /// Write the layout to the save slot
    Save,
    /// Replace the layout with the save slot
    Load,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Select a module
#[derive(Debug, Clone, Args)]
struct SelectArgs {
    /// Module id or unique prefix
    #[arg(value_name = "ID")]
    id: Option<String>,
}

/// What the loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

impl ShellArgs {
    /// Execute the shell command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut session = ctx.open_session()?;
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();

        if interactive {
            println!(
                "{APP_NAME} shell on {}. Type 'help' for commands.",
                session.slot().path().display()
            );
        }

        let mut input = stdin.lock();
        let mut line = String::new();
        loop {
            if interactive {
                print!("> ");
                io::stdout()
                    .flush()
                    .map_err(|e| CliError::io(format!("Failed to write prompt: {e}")))?;
            }

            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|e| CliError::io(format!("Failed to read input: {e}")))?;
            if read == 0 {
                break;
            }

            session.expire_notice(Instant::now());
            match run_line(&mut session, &line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => eprintln!("Error: {err}"),
            }
        }

        Ok(())
    }
}

/// Parses and runs one input line.
fn run_line(session: &mut Session, line: &str) -> CliResult<Flow> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words[0].starts_with('#') {
        return Ok(Flow::Continue);
    }

    let parsed = match ShellLine::try_parse_from(words.iter().copied()) {
        Ok(parsed) => parsed,
        Err(err) => {
            // help and usage errors are printed by clap itself
            err.print()
                .map_err(|e| CliError::io(format!("Failed to write usage: {e}")))?;
            return Ok(Flow::Continue);
        }
    };
    debug!(command = ?parsed.command, "shell command");

    match parsed.command {
        ShellCommand::Add(args) => args.apply(session)?,
        ShellCommand::Delete(args) => {
            args.apply(session)?;
        }
        ShellCommand::Move(args) => args.apply(session)?,
        ShellCommand::Rotate(args) => args.apply(session)?,
        ShellCommand::Scale(args) => args.apply(session)?,
        ShellCommand::Select(args) => select(session, &args)?,
        ShellCommand::List(args) => args.apply(session)?,
        ShellCommand::Report(args) => args.apply(session)?,
        ShellCommand::Scene(args) => args.apply(session)?,
        ShellCommand::Types(args) => args.execute()?,
        ShellCommand::Notice => match session.notice() {
            Some(message) => println!("{message}"),
            None => println!("No notice."),
        },
        ShellCommand::Save => {
            let record = session.save()?;
            println!(
                "Saved {} module(s) at {}",
                record.modules.len(),
                record.timestamp.to_rfc3339()
            );
        }
        ShellCommand::Load => match session.load()? {
            Some(timestamp) => println!(
                "Loaded {} module(s) saved at {}",
                session.layout().len(),
                timestamp.to_rfc3339()
            ),
            None => println!("Nothing to load."),
        },
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn select(session: &mut Session, args: &SelectArgs) -> CliResult<()> {
    match &args.id {
        Some(id) => {
            let id = resolve_id(session.layout(), id)?;
            session.select(Some(id));
            println!("Selected {id}");
        }
        None => {
            session.select(None);
            println!("Selection cleared.");
        }
    }
    Ok(())
}
