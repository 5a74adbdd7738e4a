//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("inject"));
    assert!(out.contains("resolve"));
    assert!(out.contains("INPUT_SECRETS"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_secret_key_value_hidden_from_help() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("INPUT_AWS-SECRET-ACCESS-KEY", "super-secret-key")
        .arg("--help")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_excludes(&output, "super-secret-key");
}
