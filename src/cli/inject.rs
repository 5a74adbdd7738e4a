//! Inject command.
//!
//! Fetches every configured secret and exports it for later steps.

use crate::cli::{runtime, Inputs};
use crate::core::platform::GitHubActions;
use crate::core::store::AwsSecretsManager;
use crate::error::Result;
use crate::runner;

/// Run the full pipeline against AWS and the GitHub Actions runner.
pub fn execute(inputs: &Inputs) -> Result<()> {
    let platform = GitHubActions::from_env();

    let config = inputs.to_config().map_err(|e| {
        runner::report_failure(&platform, &e);
        e
    })?;

    runtime()?.block_on(async {
        let store = AwsSecretsManager::connect(&config.aws).await;
        runner::run(&config, &store, &platform).await
    })?;

    Ok(())
}
