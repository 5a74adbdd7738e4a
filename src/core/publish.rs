//! Publishing derived variables to the CI environment.

use tracing::{debug, warn};

use crate::core::platform::Platform;
use crate::core::posix::posix_name;
use crate::core::types::VariableMap;
use crate::error::Result;

/// Publish every variable of one secret.
///
/// For each entry, in map order: the value is masked first, then the
/// name is rewritten into a shell-safe identifier, announced with a
/// warning and exported. When two entries map to the same identifier both
/// are exported, so the later one wins.
///
/// Returns the exported identifiers without duplicates.
///
/// # Errors
///
/// Platform failures are returned as-is; entries after the failing one are
/// not published.
pub fn publish<P: Platform + ?Sized>(platform: &P, vars: &VariableMap) -> Result<Vec<String>> {
    let mut exported: Vec<String> = Vec::with_capacity(vars.len());

    for (name, value) in vars {
        platform.set_secret(value)?;

        let id = posix_name(name);
        platform.warning(&format!("Injecting environment variable '{}'.", id))?;
        platform.export_variable(&id, value)?;

        if exported.contains(&id) {
            warn!(variable = %id, source = %name, "overrides an earlier variable of the same secret");
        } else {
            debug!(variable = %id, "exported");
            exported.push(id);
        }
    }

    Ok(exported)
}
