//! The fetch and publish pipeline.
//!
//! `run` is the single entry point: resolve names, fetch every secret
//! concurrently, normalize and publish each one. Failures are reported to
//! the platform here, so callers only decide the exit status.

use futures::future::join_all;
use tracing::{debug, error, info};

use crate::core::config::Config;
use crate::core::constants::FAILURE_PREFIX;
use crate::core::normalize::normalize;
use crate::core::platform::Platform;
use crate::core::publish::publish;
use crate::core::resolver::resolve;
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Inject every configured secret into the environment.
///
/// Secrets are fetched concurrently. A failing secret does not stop the
/// others. Once every fetch has finished, each failure is reported with
/// `set_failed`, in resolved name order. No retries.
///
/// # Errors
///
/// Returns the resolution error if names could not be resolved, or
/// `Error::Failed` if at least one secret could not be injected. Both have
/// already been reported to the platform.
pub async fn run<S, P>(config: &Config, store: &S, platform: &P) -> Result<Vec<String>>
where
    S: SecretStore + ?Sized,
    P: Platform + ?Sized,
{
    let names = match resolve(store, &config.secrets).await {
        Ok(names) => names,
        Err(e) => {
            report_failure(platform, &e);
            return Err(e);
        }
    };
    info!(store = store.name(), secrets = names.len(), "resolved secrets");

    let outcomes = join_all(names.iter().map(|name| inject(store, platform, name))).await;

    let total = outcomes.len();
    let mut exported = Vec::new();
    let mut failed = 0usize;
    for (name, outcome) in names.iter().zip(outcomes) {
        match outcome {
            Ok(ids) => exported.extend(ids),
            Err(e) => {
                failed += 1;
                error!(secret = %name, error = %e, "failed to inject secret");
                report_failure(platform, &e);
            }
        }
    }

    if failed > 0 {
        return Err(Error::Failed { failed, total });
    }

    info!(variables = exported.len(), "secrets injected");
    Ok(exported)
}

/// Fetch, normalize and publish one secret.
pub async fn inject<S, P>(store: &S, platform: &P, name: &str) -> Result<Vec<String>>
where
    S: SecretStore + ?Sized,
    P: Platform + ?Sized,
{
    let raw = store.get_secret_value(name).await?;
    let vars = normalize(name, &raw)?;
    debug!(secret = %name, variables = vars.len(), "normalized secret");
    publish(platform, &vars)
}

/// Report a failure to the platform, logging if even that fails.
pub fn report_failure<P: Platform + ?Sized>(platform: &P, err: &Error) {
    let message = format!("{}{}", FAILURE_PREFIX, err);
    if let Err(e) = platform.set_failed(&message) {
        error!(error = %e, "could not report failure to the platform");
    }
}
