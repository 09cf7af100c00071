//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Habitat Planner";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "habitat-planner";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "HabitatPlanner";

/// Environment variable that overrides the config directory (used by tests and scripts).
pub const CONFIG_DIR_ENV: &str = "HABITAT_PLANNER_CONFIG_DIR";

/// File name of the single named save slot.
pub const SAVE_SLOT_FILE_NAME: &str = "habitat-layout.json";
