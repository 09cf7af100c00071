//! Habitat Planner Library
//!
//! This library provides the core of the habitat module editor: the layout
//! store with collision-checked placement, derived mission metrics, the
//! single-slot save record and the CLI command handlers built on them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
