//! Resolve command.
//!
//! Prints the secret names the inputs expand to, one per line. Values are
//! never fetched.

use crate::cli::{output, runtime, Inputs};
use crate::core::resolver;
use crate::core::store::AwsSecretsManager;
use crate::error::Result;

/// Print resolved secret names.
pub fn execute(inputs: &Inputs) -> Result<()> {
    let config = inputs.to_config()?;

    let names = runtime()?.block_on(async {
        let store = AwsSecretsManager::connect(&config.aws).await;
        resolver::resolve(&store, &config.secrets).await
    })?;

    if names.is_empty() {
        output::dimmed("no secrets matched");
    }
    for name in names {
        println!("{}", name);
    }

    Ok(())
}
