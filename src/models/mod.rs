//! Data models for habitat layouts.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of UI and persistence.

pub mod layout;
pub mod module;
pub mod module_type;
pub mod rgb;

// Re-export all model types
pub use layout::{Layout, ResolveError};
pub use module::{Axis, Module, ModuleId, Vec3};
pub use module_type::{ModuleSpec, ModuleType, Shape};
pub use rgb::RgbColor;
