//! CLI command handlers for Habitat Planner.
//!
//! One-shot commands load the save slot, apply one edit and write it back.
//! The `shell` command keeps a session open and reads commands from stdin.

pub mod add;
pub mod common;
pub mod config;
pub mod delete;
pub mod list;
pub mod report;
pub mod reposition;
pub mod rotate;
pub mod scale;
pub mod scene;
pub mod shell;
pub mod types;

// Re-export types used by main.rs and tests
pub use add::AddArgs;
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use delete::DeleteArgs;
pub use list::ListArgs;
pub use report::ReportArgs;
pub use reposition::MoveArgs;
pub use rotate::RotateArgs;
pub use scale::ScaleArgs;
pub use scene::SceneArgs;
pub use shell::ShellArgs;
pub use types::TypesArgs;
