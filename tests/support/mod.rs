//! Test support utilities for smenv integration tests.
//!
//! Provides an isolated environment for running the binary.

#![allow(dead_code)]

pub mod assertions;
pub mod stub;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use stub::{Reply, StubAws};

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Inputs and platform variables the binary reads from the environment.
const INHERITED: &[&str] = &[
    "INPUT_SECRETS",
    "INPUT_AWS-ACCESS-KEY-ID",
    "INPUT_AWS-SECRET-ACCESS-KEY",
    "INPUT_AWS-REGION",
    "GITHUB_ENV",
    "SMENV_LOG",
    "AWS_PROFILE",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_ENDPOINT_URL",
    "AWS_MAX_ATTEMPTS",
    "AWS_RETRY_MODE",
];

/// Test environment with an isolated home and `GITHUB_ENV` file.
///
/// Child processes get a scrubbed environment, so tests can run in
/// parallel and never pick up real credentials.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
    /// Path of the env file handed to the binary as `GITHUB_ENV`
    pub env_file: PathBuf,
}

impl Test {
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        let env_file = home.path().join("github_env");
        std::fs::write(&env_file, "").expect("failed to create env file");

        Self { home, env_file }
    }

    /// An smenv command with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("smenv").expect("failed to find smenv binary");
        for var in INHERITED {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("GITHUB_ENV", &self.env_file);
        cmd.env("NO_COLOR", "1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env("AWS_CONFIG_FILE", self.home.path().join("aws_config"));
        cmd.env("AWS_SHARED_CREDENTIALS_FILE", self.home.path().join("aws_credentials"));
        cmd.current_dir(self.home.path());
        cmd
    }

    /// A command pointed at an AWS endpoint that refuses connections.
    pub fn offline_cmd(&self) -> Command {
        self.endpoint_cmd("http://127.0.0.1:9")
    }

    /// A command talking to the AWS endpoint at `url` with static inputs.
    pub fn endpoint_cmd(&self, url: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("AWS_ENDPOINT_URL", url);
        cmd.env("INPUT_AWS-ACCESS-KEY-ID", "AKIDEXAMPLE");
        cmd.env("INPUT_AWS-SECRET-ACCESS-KEY", "wJalrXUtnFEMI");
        cmd.env("INPUT_AWS-REGION", "us-east-1");
        cmd
    }

    /// Contents of the env file.
    pub fn env_file_contents(&self) -> String {
        std::fs::read_to_string(&self.env_file).unwrap_or_default()
    }
}
