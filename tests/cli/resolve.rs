//! Tests for the resolve command.

use crate::support::*;

#[test]
fn test_literal_names_resolve_without_store_access() {
    let t = Test::new();

    // literal names never touch the store, so an unreachable endpoint is fine
    let output = t
        .offline_cmd()
        .args(["resolve", "--secrets", "b, a,b,,a"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "b\na\n");
}

#[test]
fn test_wildcard_resolution_needs_the_store() {
    let t = Test::new();

    let output = t
        .offline_cmd()
        .args(["resolve", "--secrets", "prod/*"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "ListSecrets failed");
    assert_stderr_contains(&output, "check the AWS credentials and region");
}

#[test]
fn test_resolve_requires_secrets() {
    let t = Test::new();

    let output = t.cmd().arg("resolve").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "input required and not supplied: secrets");
    // resolve never talks to the platform
    assert!(stdout(&output).is_empty());
}
