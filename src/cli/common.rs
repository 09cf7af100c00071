//! Shared CLI plumbing: error type, exit codes and session helpers.

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::models::{Layout, ModuleId, ResolveError};
use crate::services::{LoadError, SaveError, SaveSlot, Session, StoreError};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown type or id, invalid number, malformed config
    Validation = 1,
    /// Reading or writing the save slot or config failed
    Io = 2,
    /// The edit would overlap another module
    Collision = 3,
}

impl ExitCode {
    /// Numeric code for [`std::process::exit`].
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error carried back to `main`, already phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    message: String,
    exit_code: ExitCode,
}

/// Result alias for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Validation,
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Io,
        }
    }

    /// Rejected placement.
    pub fn collision(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Collision,
        }
    }

    /// Message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Collision => Self::collision(err.to_string()),
            StoreError::ModuleNotFound(_) | StoreError::InvalidValue(_) => {
                Self::validation(err.to_string())
            }
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        Self::io(err.to_string())
    }
}

impl From<SaveError> for CliError {
    fn from(err: SaveError) -> Self {
        Self::io(err.to_string())
    }
}

/// Options shared by every command that touches the save slot.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Explicit slot file from `--slot`
    pub slot: Option<PathBuf>,
}

impl CliContext {
    /// Context with an optional slot override.
    #[must_use]
    pub const fn new(slot: Option<PathBuf>) -> Self {
        Self { slot }
    }

    /// Opens a session over the resolved slot, loading any saved layout.
    pub fn open_session(&self) -> CliResult<Session> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = match &self.slot {
            Some(path) => path.clone(),
            None => config
                .save_slot_path()
                .map_err(|e| CliError::io(format!("Failed to resolve save slot: {e:#}")))?,
        };
        Ok(Session::open(
            SaveSlot::new(path),
            config.editor.notice_duration(),
        )?)
    }

    /// Runs one edit against the saved layout and writes the result back.
    ///
    /// Nothing is written when `edit` fails, so a rejected command never
    /// changes the slot.
    pub fn edit<T>(&self, edit: impl FnOnce(&mut Session) -> CliResult<T>) -> CliResult<T> {
        let mut session = self.open_session()?;
        let output = edit(&mut session)?;
        session.save()?;
        Ok(output)
    }
}

/// Resolves a full id or unique id prefix against the layout.
pub fn resolve_id(layout: &Layout, id: &str) -> CliResult<ModuleId> {
    Ok(layout.resolve(id)?)
}

/// Prints `value` as compact JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
