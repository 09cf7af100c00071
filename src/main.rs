//! Habitat Planner - habitat module layout editor
//!
//! Places, moves, rotates and scales habitat modules with bounding-box
//! collision checks, and reports illustrative cost, mass and compliance
//! figures for the layout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use habitat_planner::cli::{
    AddArgs, CliContext, CliResult, ConfigArgs, DeleteArgs, ExitCode, ListArgs, MoveArgs,
    ReportArgs, RotateArgs, ScaleArgs, SceneArgs, ShellArgs, TypesArgs,
};
use habitat_planner::constants::APP_BINARY_NAME;

/// Habitat Planner - place habitat modules and check the mission figures
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Save slot file (overrides the configured slot)
    #[arg(long, global = true, value_name = "FILE")]
    slot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
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
    /// List placed modules
    List(ListArgs),
    /// Show mission metrics, compliance and logistics
    Report(ReportArgs),
    /// List module types
    Types(TypesArgs),
    /// Print render nodes for a display front end
    Scene(SceneArgs),
    /// Interactive editing session on stdin
    Shell(ShellArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match self {
            Self::Add(args) => args.execute(ctx),
            Self::Delete(args) => args.execute(ctx),
            Self::Move(args) => args.execute(ctx),
            Self::Rotate(args) => args.execute(ctx),
            Self::Scale(args) => args.execute(ctx),
            Self::List(args) => args.execute(ctx),
            Self::Report(args) => args.execute(ctx),
            Self::Types(args) => args.execute(),
            Self::Scene(args) => args.execute(ctx),
            Self::Shell(args) => args.execute(ctx),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = CliContext::new(cli.slot.clone());
    let code = match cli.command.execute(&ctx) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };
    std::process::exit(code.code());
}
