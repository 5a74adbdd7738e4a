//! Full listing of a secret store.

use tracing::debug;

use crate::core::store::SecretStore;
use crate::core::types::SecretDescriptor;
use crate::error::Result;

/// List every live secret in the store.
///
/// Pages are requested strictly one after another: the next request is
/// only sent once the previous page (and its continuation token) has
/// arrived. Soft-deleted entries are dropped.
///
/// # Errors
///
/// Returns `Error::StoreUnavailable` if any page request fails. Pages
/// already received are discarded.
pub async fn list_all<S: SecretStore + ?Sized>(store: &S) -> Result<Vec<SecretDescriptor>> {
    let mut secrets = Vec::new();
    let mut next_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = store.list_secrets_page(next_token.as_deref()).await?;
        pages += 1;

        let total = page.secrets.len();
        secrets.extend(page.secrets.into_iter().filter(|s| !s.deleted));
        debug!(
            store = store.name(),
            page = pages,
            entries = total,
            "listed secrets page"
        );

        // An empty token would restart the listing from the top.
        next_token = page.next_token.filter(|t| !t.is_empty());
        if next_token.is_none() {
            break;
        }
    }

    debug!(pages, secrets = secrets.len(), "listing complete");
    Ok(secrets)
}
