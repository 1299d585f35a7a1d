//! Integration tests for the bootprune CLI surface.
//!
//! The interactive flow is exercised at the library level in
//! `end_to_end.rs`; these tests cover the binary's argument handling.

use std::process::Command;

fn bootprune() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bootprune"))
}

#[test]
fn help_describes_the_tool() {
    let output = bootprune()
        .arg("--help")
        .output()
        .expect("failed to run bootprune");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.to_lowercase().contains("kernel"));
    assert!(stdout.contains("--help"));
}

#[test]
fn version_is_reported() {
    let output = bootprune()
        .arg("--version")
        .output()
        .expect("failed to run bootprune");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bootprune"));
}

#[test]
fn unknown_arguments_are_rejected() {
    let output = bootprune()
        .arg("--bogus")
        .output()
        .expect("failed to run bootprune");

    assert!(!output.status.success());
}
