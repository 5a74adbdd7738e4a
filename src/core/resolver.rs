//! Resolution of input name patterns to concrete secret names.

use std::collections::HashSet;

use tracing::debug;

use crate::core::lister;
use crate::core::matcher::{has_wildcard, Pattern};
use crate::core::store::SecretStore;
use crate::error::Result;

/// Resolve input patterns to the secret names to fetch.
///
/// Inputs are de-duplicated first. When at least one input contains `*`,
/// the store is listed once and every input is matched against the
/// listing, so plain names only survive if they exist. Without any
/// wildcard the inputs are returned as-is and the store is never listed;
/// a missing secret then fails later, when it is fetched.
///
/// The result keeps first-seen order and holds no duplicates.
///
/// # Errors
///
/// Returns `Error::StoreUnavailable` if the listing fails.
pub async fn resolve<S, I>(store: &S, inputs: &[I]) -> Result<Vec<String>>
where
    S: SecretStore + ?Sized,
    I: AsRef<str>,
{
    let inputs = dedup(inputs.iter().map(|i| i.as_ref().to_string()));

    if !inputs.iter().any(|i| has_wildcard(i)) {
        debug!(count = inputs.len(), "no wildcard in inputs, skipping listing");
        return Ok(inputs);
    }

    let listing: Vec<String> = lister::list_all(store)
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();

    let mut matched = Vec::new();
    for input in &inputs {
        let pattern = Pattern::new(input)?;
        let found = pattern.filter(&listing);
        if found.is_empty() {
            debug!(pattern = %input, wildcard = pattern.is_wildcard(), "pattern matched no secrets");
        }
        matched.extend(found);
    }

    let resolved = dedup(matched);
    debug!(
        patterns = inputs.len(),
        listed = listing.len(),
        resolved = resolved.len(),
        "resolved secret names"
    );
    Ok(resolved)
}

/// Drop repeated names, keeping the first occurrence.
fn dedup(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|n| seen.insert(n.clone()))
        .collect()
}
