//! Constants used throughout smenv.
//!
//! Centralizes input names, the variable prefix and workflow command names.

/// Prefix applied to every derived variable name.
///
/// Marks the variable as pipeline-injected and makes it visible to
/// Terraform as an input variable.
pub const VAR_PREFIX: &str = "TF_VAR_";

/// Wildcard character accepted in secret name patterns.
pub const WILDCARD: char = '*';

/// Separator between entries of the `secrets` input.
pub const SECRETS_SEPARATOR: char = ',';

/// Step input holding the comma-separated secret name patterns.
pub const INPUT_SECRETS: &str = "secrets";

/// Environment variable that names the runner's env file.
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// Environment variable controlling log filtering.
pub const LOG_ENV: &str = "SMENV_LOG";

/// Prefix of every failure message reported to the platform.
pub const FAILURE_PREFIX: &str = "Action failed with error: ";
