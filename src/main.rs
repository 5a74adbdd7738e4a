//! smenv - inject AWS Secrets Manager secrets into CI pipeline environments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smenv::cli::output;
use smenv::cli::{execute, Cli};
use smenv::core::constants::LOG_ENV;
use smenv::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("smenv=debug")
        } else {
            EnvFilter::new("smenv=warn")
        }
    });

    // stdout carries workflow commands, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.inputs) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingInput(_)) | Error::Config(ConfigError::NoSecrets(_)) => {
                Some("set INPUT_SECRETS or pass --secrets")
            }
            Error::StoreUnavailable { .. } => Some("check the AWS credentials and region"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
