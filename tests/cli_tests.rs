// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the CLI argument contract

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn claimcheck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_claimcheck"))
}

#[test]
fn test_no_arguments_exits_one_with_usage() {
    let output = claimcheck().output().expect("binary should spawn");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage"),
        "expected a usage message, got: {stderr}"
    );
}

#[test]
fn test_extra_positional_exits_one_with_usage() {
    let output = claimcheck()
        .args(["first.md", "second.md"])
        .output()
        .expect("binary should spawn");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage"),
        "expected a usage message, got: {stderr}"
    );
}

#[test]
fn test_single_valid_path_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "wrote 1500 bytes to disk\n").unwrap();

    let output = claimcheck()
        .arg(&path)
        .output()
        .expect("binary should spawn");

    // Findings still exit 0; only malformed invocations exit 1.
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Usage"),
        "valid invocation must not print usage, got: {stderr}"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1500 bytes"));
}

#[test]
fn test_clean_file_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clean.md");
    fs::write(&path, "nothing to flag here\n").unwrap();

    let output = claimcheck()
        .arg(&path)
        .output()
        .expect("binary should spawn");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clean"));
}

#[test]
fn test_missing_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no_such_file.md");

    let output = claimcheck()
        .arg(&missing)
        .output()
        .expect("binary should spawn");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"));
}

#[test]
fn test_help_exits_zero() {
    let output = claimcheck()
        .arg("--help")
        .output()
        .expect("binary should spawn");

    assert_eq!(output.status.code(), Some(0));
}
