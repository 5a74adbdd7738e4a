//! Run configuration.
//!
//! Built once from the step inputs and handed to `runner::run`; nothing
//! below the CLI reads inputs from the environment.

use tracing::debug;

use crate::core::constants::{INPUT_SECRETS, SECRETS_SEPARATOR};
use crate::error::{ConfigError, Result};

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Secret names or wildcard patterns, in input order.
    pub secrets: Vec<String>,
    pub aws: AwsSettings,
}

/// Connection settings for AWS Secrets Manager.
///
/// Absent values fall back to the default AWS provider chains.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AwsSettings {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
}

impl std::fmt::Debug for AwsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSettings")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("region", &self.region)
            .finish()
    }
}

impl AwsSettings {
    /// Settings with empty strings treated as absent.
    pub fn new(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
        region: Option<String>,
    ) -> Self {
        Self {
            access_key_id: non_empty(access_key_id),
            secret_access_key: non_empty(secret_access_key),
            region: non_empty(region),
        }
    }

    /// Key id and secret, when both were given.
    pub fn static_credentials(&self) -> Option<(String, String)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Some((id.clone(), secret.clone())),
            _ => None,
        }
    }
}

impl Config {
    /// Build a config from the raw `secrets` input.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoSecrets` if the input holds no names.
    pub fn from_inputs(secrets: &str, aws: AwsSettings) -> Result<Self> {
        let secrets = parse_secret_names(secrets);
        if secrets.is_empty() {
            return Err(ConfigError::NoSecrets(INPUT_SECRETS).into());
        }

        debug!(count = secrets.len(), aws = ?aws, "config loaded");
        Ok(Self { secrets, aws })
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// Duplicates are kept; the resolver removes them.
pub fn parse_secret_names(input: &str) -> Vec<String> {
    input
        .split(SECRETS_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
