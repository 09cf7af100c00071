//! End-to-end tests for the interactive `shell` command.

use std::io::Write;
use std::process::{Output, Stdio};

mod fixtures;
use fixtures::*;

/// Runs the shell with `script` on stdin.
fn run_shell(workspace: &Workspace, script: &str) -> Output {
    let mut child = workspace
        .command(&["shell"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn shell");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_shell_only_writes_on_save() {
    let workspace = Workspace::new();
    let output = run_shell(&workspace, "add dormitory\nlist\nquit\n");

    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Crew Quarters"));
    assert!(!workspace.slot_path().exists());
}

#[test]
fn test_shell_save_persists_layout() {
    let workspace = Workspace::new();
    let script = "\
add dormitory
# comment lines are skipped
select
add greenhouse
save
";
    let output = run_shell(&workspace, script);
    assert_success(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("overlap"), "second add should collide: {stderr}");
    assert_eq!(workspace.saved_layout().len(), 1);
}

#[test]
fn test_shell_load_restores_saved_layout() {
    let workspace = Workspace::new();
    workspace.seed(&test_layout_pair());
    let id = fixed_id(1).to_string();

    let script = format!("delete {id}\nload\nlist --json\n");
    let output = run_shell(&workspace, &script);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_line = stdout
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("list --json output");
    let list: serde_json::Value = serde_json::from_str(json_line).unwrap();
    assert_eq!(list["count"], 2);
    assert!(list["selected"].is_null());
}

#[test]
fn test_shell_survives_bad_input() {
    let workspace = Workspace::new();
    let output = run_shell(&workspace, "fly away\nscale nope 2\nadd airlock\nsave\n");

    assert_success(&output);
    assert_eq!(workspace.saved_layout().len(), 1);
}
