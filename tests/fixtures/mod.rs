//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // not every test binary uses every fixture

use chrono::{TimeZone, Utc};
use habitat_planner::constants::CONFIG_DIR_ENV;
use habitat_planner::models::{Axis, Layout, Module, ModuleId, ModuleType, Vec3};
use habitat_planner::services::{SaveRecord, SaveSlot};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use uuid::Uuid;

/// Deterministic module id.
pub fn fixed_id(n: u128) -> ModuleId {
    ModuleId::from_uuid(Uuid::from_u128(n))
}

/// Dormitory at x = -10 and ECLSS at x = 10, far enough apart not to collide.
pub fn test_layout_pair() -> Layout {
    Layout::from_modules(vec![
        Module::with_id(fixed_id(1), ModuleType::Dormitory).at(Vec3::new(-10.0, 0.0, 0.0)),
        Module::with_id(fixed_id(2), ModuleType::LifeSupport).at(Vec3::new(10.0, 0.0, 0.0)),
    ])
}

/// One module of every type laid out in a row along x, rotated and scaled
/// differently.
pub fn test_layout_all_types() -> Layout {
    let modules = ModuleType::ALL
        .iter()
        .enumerate()
        .map(|(i, &module_type)| {
            let offset = f64::from(u32::try_from(i).unwrap());
            let mut module = Module::with_id(fixed_id(100 + i as u128), module_type)
                .at(Vec3::new(offset * 8.0, offset, -offset));
            module.set_rotation_degrees(Axis::Y, offset * 30.0);
            module.set_scale(1.0 + offset * 0.1);
            module
        })
        .collect();
    Layout::from_modules(modules)
}

/// Save record with a fixed timestamp.
pub fn test_record(layout: &Layout) -> SaveRecord {
    SaveRecord::new(layout, Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap())
}

/// Isolated workspace: its own config directory and save slot.
pub struct Workspace {
    /// Keeps the directory alive
    pub temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    pub fn slot_path(&self) -> PathBuf {
        self.temp_dir.path().join("slot.json")
    }

    pub fn slot(&self) -> SaveSlot {
        SaveSlot::new(self.slot_path())
    }

    /// Writes `layout` into the slot with a fixed timestamp.
    pub fn seed(&self, layout: &Layout) {
        self.slot().write(&test_record(layout)).unwrap();
    }

    /// Command for the binary with the workspace's config dir and slot.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(habitat_bin());
        cmd.env(CONFIG_DIR_ENV, self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd.arg("--slot").arg(self.slot_path());
        cmd.args(args);
        cmd
    }

    /// Runs the binary and returns its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs with `--json` appended and parses stdout.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full: Vec<&str> = args.to_vec();
        full.push("--json");
        let output = self.run(&full);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
    }

    /// Layout currently in the slot.
    pub fn saved_layout(&self) -> Layout {
        match self.slot().load().unwrap() {
            habitat_planner::services::LoadOutcome::Loaded(record) => record.into_layout(),
            habitat_planner::services::LoadOutcome::Empty => Layout::new(),
        }
    }
}

/// Path to the habitat-planner binary.
pub fn habitat_bin() -> &'static str {
    env!("CARGO_BIN_EXE_habitat-planner")
}

/// Asserts exit code 0, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Asserts a specific exit code.
pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Creates a file with `content` under `dir`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
