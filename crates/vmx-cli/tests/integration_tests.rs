//! Integration tests for the vmxtool binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

/// Get a Command for the vmxtool binary
fn vmxtool() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vmxtool"));
    cmd.env_remove("VMXTOOL_VERBOSE").env("NO_COLOR", "1");
    cmd
}

const VMX: &str = "\
.encoding = \"UTF-8\"
# note
guestOS = \"other\"

memsize = \"1024\"   # MB
";

fn fixture() -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vm.vmx");
    fs::write(&path, VMX).unwrap();
    (dir, path)
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    vmxtool()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("VMX"))
        .stdout(predicate::str::contains("query"));
}

#[test]
fn test_help_subcommand() {
    vmxtool()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn test_version_subcommand() {
    vmxtool()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vmxtool version"))
        .stdout(predicate::str::contains("Build date:"))
        .stdout(predicate::str::contains("Commit:"));
}

#[test]
fn test_no_command_fails() {
    vmxtool()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no command provided"));
}

#[test]
fn test_unknown_command_fails() {
    vmxtool().arg("frobnicate").assert().failure();
}

// ============================================================================
// Read Commands
// ============================================================================

#[test]
fn test_print_echoes_file() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("print")
        .arg(&path)
        .assert()
        .success()
        .stdout(VMX);
}

#[test]
fn test_print_json() {
    let (_dir, path) = fixture();
    let output = vmxtool()
        .args(["print", "--json"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[2]["key"], "memsize");
    assert_eq!(value[2]["comment"], "# MB");
}

#[test]
fn test_query_case_insensitive() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("query")
        .arg(&path)
        .arg("GUESTOS")
        .assert()
        .success()
        .stdout("other\n");
}

#[test]
fn test_query_missing_key() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("query")
        .arg(&path)
        .arg("numvcpus")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("key 'numvcpus' does not exist"));
}

// ============================================================================
// Edit Commands
// ============================================================================

#[test]
fn test_set_rewrites_only_target_line() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("set")
        .arg(&path)
        .arg("guestOS=linux")
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        VMX.replace("\"other\"", "\"linux\"")
    );
}

#[test]
fn test_add_then_duplicate() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("add")
        .arg(&path)
        .arg("numvcpus=2")
        .assert()
        .success();

    vmxtool()
        .arg("add")
        .arg(&path)
        .arg("NUMVCPUS=4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists (as 'numvcpus')"));

    assert!(fs::read_to_string(&path)
        .unwrap()
        .ends_with("numvcpus = \"2\"\n"));
}

#[test]
fn test_add_creates_new_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new.vmx");

    vmxtool()
        .arg("add")
        .arg(&path)
        .arg("displayName=\"a \\\"quoted\\\" name\"")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "displayName = \"a \\\"quoted\\\" name\"\n"
    );

    vmxtool()
        .arg("query")
        .arg(&path)
        .arg("displayname")
        .assert()
        .success()
        .stdout("a \"quoted\" name\n");
}

#[test]
fn test_set_invalid_assignment() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("set")
        .arg(&path)
        .arg("missing-equals")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));

    assert_eq!(fs::read_to_string(&path).unwrap(), VMX);
}

#[test]
fn test_remove_entry() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("remove")
        .arg(&path)
        .arg("memsize")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        ".encoding = \"UTF-8\"\n# note\nguestOS = \"other\"\n\n"
    );
}

#[test]
fn test_remove_missing_key() {
    let (_dir, path) = fixture();
    vmxtool()
        .arg("remove")
        .arg(&path)
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("key 'nope' does not exist"));
}

#[test]
fn test_dry_run_prints_diff_and_keeps_file() {
    let (_dir, path) = fixture();
    vmxtool()
        .args(["set", "--dry-run"])
        .arg(&path)
        .arg("memsize=2048")
        .assert()
        .success()
        .stdout(predicate::str::contains("-memsize = \"1024\"   # MB"))
        .stdout(predicate::str::contains("+memsize = \"2048\"   # MB"));

    assert_eq!(fs::read_to_string(&path).unwrap(), VMX);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let (_dir, path) = fixture();
    vmxtool()
        .args(["-v", "query"])
        .arg(&path)
        .arg("memsize")
        .assert()
        .success()
        .stdout("1024\n")
        .stderr(predicate::str::contains("loaded document"));
}

#[test]
fn test_completions_bash() {
    vmxtool()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vmxtool"));
}
