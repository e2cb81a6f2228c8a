//! Exit-code contract tests for the send-to-bottom binary.
//!
//! Only the argument and liveness failure paths are exercised here: they
//! behave the same on every host. The success path needs a live window in a
//! real desktop session and is covered by the Windows-gated unit tests in
//! the window-sink crate.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_send-to-bottom"))
        .args(args)
        .output()
        .expect("failed to spawn send-to-bottom")
}

#[test]
fn missing_argument_exits_1_with_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage:"), "stderr was: {stderr}");
}

#[test]
fn flag_without_handle_still_counts_as_missing_argument() {
    let output = run(&["--clear-topmost"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn null_handle_exits_2() {
    let output = run(&["0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid window handle."), "stderr was: {stderr}");
}

#[test]
fn non_hex_garbage_resolves_to_the_null_handle() {
    let output = run(&["zzzz"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid window handle."), "stderr was: {stderr}");
}

#[test]
fn rejection_is_repeatable() {
    for _ in 0..2 {
        assert_eq!(run(&["0"]).status.code(), Some(2));
    }
}
