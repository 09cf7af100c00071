//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, SAVE_SLOT_FILE_NAME};

/// Longest notice display time accepted (one minute).
const MAX_NOTICE_DURATION_MS: u64 = 60_000;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Save slot file. Defaults to `habitat-layout.json` in the config directory.
    pub save_slot: Option<PathBuf>,
}

/// Editor behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// How long the collision notice stays visible, in milliseconds
    pub notice_duration_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 3000,
        }
    }
}

impl EditorConfig {
    /// Notice display time as a [`Duration`].
    #[must_use]
    pub const fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Editor preferences
    pub editor: EditorConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `HABITAT_PLANNER_CONFIG_DIR` overrides the platform default:
    /// - Linux: `~/.config/HabitatPlanner/`
    /// - macOS: `~/Library/Application Support/HabitatPlanner/`
    /// - Windows: `%APPDATA%\HabitatPlanner\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, defaulting when it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` atomically.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `notice_duration_ms` is between 1 and 60000
    /// - `save_slot` (if set) is not empty and not a directory
    pub fn validate(&self) -> Result<()> {
        let ms = self.editor.notice_duration_ms;
        if ms == 0 || ms > MAX_NOTICE_DURATION_MS {
            anyhow::bail!(
                "Notice duration must be between 1 and {MAX_NOTICE_DURATION_MS} ms, got {ms}"
            );
        }

        if let Some(slot) = &self.paths.save_slot {
            if slot.as_os_str().is_empty() {
                anyhow::bail!("Save slot path must not be empty");
            }
            if slot.is_dir() {
                anyhow::bail!("Save slot path is a directory: {}", slot.display());
            }
        }

        Ok(())
    }

    /// Resolves the save slot file, falling back to the config directory.
    pub fn save_slot_path(&self) -> Result<PathBuf> {
        match &self.paths.save_slot {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(SAVE_SLOT_FILE_NAME)),
        }
    }
}
