//! Command-line interface.
//!
//! Step inputs arrive the way GitHub Actions passes them, as
//! `INPUT_<NAME>` environment variables; every one can also be given as a
//! flag for local runs.

pub mod inject;
pub mod output;
pub mod resolve;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{AwsSettings, Config};
use crate::core::constants::INPUT_SECRETS;
use crate::error::{ConfigError, Result};

/// smenv - inject AWS Secrets Manager secrets into CI environments.
#[derive(Parser)]
#[command(
    name = "smenv",
    about = "Inject AWS Secrets Manager secrets into CI pipeline environments",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub inputs: Inputs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Step inputs.
#[derive(Args, Debug, Default, Clone)]
pub struct Inputs {
    /// Comma-separated secret names; `*` matches any characters
    #[arg(long, env = "INPUT_SECRETS", global = true)]
    pub secrets: Option<String>,

    /// AWS access key id (default credential chain if unset)
    #[arg(long, env = "INPUT_AWS-ACCESS-KEY-ID", global = true)]
    pub aws_access_key_id: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "INPUT_AWS-SECRET-ACCESS-KEY", hide_env_values = true, global = true)]
    pub aws_secret_access_key: Option<String>,

    /// AWS region (default region chain if unset)
    #[arg(long, env = "INPUT_AWS-REGION", global = true)]
    pub aws_region: Option<String>,
}

impl Inputs {
    /// Turn raw inputs into a run configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `secrets` is missing or names nothing.
    pub fn to_config(&self) -> Result<Config> {
        let secrets = self
            .secrets
            .as_deref()
            .ok_or(ConfigError::MissingInput(INPUT_SECRETS))?;

        Config::from_inputs(
            secrets,
            AwsSettings::new(
                self.aws_access_key_id.clone(),
                self.aws_secret_access_key.clone(),
                self.aws_region.clone(),
            ),
        )
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch the secrets and export them as environment variables (default)
    Inject,

    /// Print the secret names the inputs resolve to, without fetching values
    Resolve,
}

/// Execute a command.
pub fn execute(command: Option<Command>, inputs: &Inputs) -> Result<()> {
    match command.unwrap_or(Command::Inject) {
        Command::Inject => inject::execute(inputs),
        Command::Resolve => resolve::execute(inputs),
    }
}

/// Single-threaded runtime for the async store client.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
