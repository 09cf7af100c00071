//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Save slot file
    #[arg(long, value_name = "FILE")]
    save_slot: Option<PathBuf>,

    /// Collision notice display time in milliseconds
    #[arg(long, value_name = "MS")]
    notice_ms: Option<u64>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    editor: EditorOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    save_slot: String,
    save_slot_is_default: bool,
}

#[derive(Serialize, Debug)]
struct EditorOutput {
    notice_duration_ms: u64,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = build_output(&config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.save_slot.is_none() && self.notice_ms.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --save-slot or --notice-ms",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.save_slot {
            config.paths.save_slot = Some(path.clone());
        }
        if let Some(ms) = self.notice_ms {
            config.editor.notice_duration_ms = ms;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config file: {e:#}")))?;
    let save_slot = config
        .save_slot_path()
        .map_err(|e| CliError::io(format!("Failed to resolve save slot: {e:#}")))?;

    Ok(ConfigOutput {
        config_file: config_file.to_string_lossy().to_string(),
        paths: PathsOutput {
            save_slot: save_slot.to_string_lossy().to_string(),
            save_slot_is_default: config.paths.save_slot.is_none(),
        },
        editor: EditorOutput {
            notice_duration_ms: config.editor.notice_duration_ms,
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("Config file: {}", output.config_file);
    println!();

    println!("Paths:");
    if output.paths.save_slot_is_default {
        println!("  Save Slot: {} (default)", output.paths.save_slot);
    } else {
        println!("  Save Slot: {}", output.paths.save_slot);
    }
    println!();

    println!("Editor:");
    println!(
        "  Notice Duration: {} ms",
        output.editor.notice_duration_ms
    );
    println!();
}
