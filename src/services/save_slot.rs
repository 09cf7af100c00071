//! Single named save slot for the layout.
//!
//! The slot is one JSON file holding `{ "modules": [...], "timestamp": ... }`.
//! Saving overwrites it unconditionally. Loading distinguishes an absent slot
//! from a damaged one, and never touches in-memory state on failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Layout, Module};

/// The persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Modules in layout order
    pub modules: Vec<Module>,
    /// When the record was written
    pub timestamp: DateTime<Utc>,
}

impl SaveRecord {
    /// Snapshots `layout` stamped with `timestamp`.
    #[must_use]
    pub fn new(layout: &Layout, timestamp: DateTime<Utc>) -> Self {
        Self {
            modules: layout.modules().to_vec(),
            timestamp,
        }
    }

    /// Rebuilds the layout verbatim.
    #[must_use]
    pub fn into_layout(self) -> Layout {
        Layout::from_modules(self.modules)
    }
}

/// What a load found in the slot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A valid record
    Loaded(SaveRecord),
    /// Nothing has been saved yet
    Empty,
}

/// Failure reading the slot. Current state is left untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The slot exists but could not be read.
    #[error("Failed to read save slot {path}: {source}")]
    Io {
        /// Slot file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// The slot does not hold a valid record.
    #[error("Save slot {path} is malformed: {source}")]
    Malformed {
        /// Slot file
        path: PathBuf,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Failure writing the slot.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Writing, or replacing the previous record, failed.
    #[error("Failed to write save slot {path}: {source}")]
    Io {
        /// Slot file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// The record could not be encoded.
    #[error("Failed to serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A save slot backed by one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    /// Slot stored at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing the slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether anything has been saved.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes `layout` with the current time, replacing any earlier record.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the record cannot be encoded or written.
    pub fn save(&self, layout: &Layout) -> Result<SaveRecord, SaveError> {
        let record = SaveRecord::new(layout, Utc::now());
        self.write(&record)?;
        Ok(record)
    }

    /// Writes `record` atomically: temp file first, then rename over the slot.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the record cannot be encoded or written.
    pub fn write(&self, record: &SaveRecord) -> Result<(), SaveError> {
        let content = serde_json::to_string_pretty(record)?;
        let io_err = |source| SaveError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).map_err(io_err)?;
        fs::rename(&temp_path, &self.path).map_err(io_err)?;

        info!(
            path = %self.path.display(),
            modules = record.modules.len(),
            "layout saved"
        );
        Ok(())
    }

    /// Reads the slot.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Io`] if the file exists but cannot be read
    /// - [`LoadError::Malformed`] if it does not parse as a record
    pub fn load(&self) -> Result<LoadOutcome, LoadError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "save slot is empty");
                return Ok(LoadOutcome::Empty);
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let record: SaveRecord =
            serde_json::from_str(&content).map_err(|source| LoadError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path = %self.path.display(),
            modules = record.modules.len(),
            "save slot read"
        );
        Ok(LoadOutcome::Loaded(record))
    }
}
