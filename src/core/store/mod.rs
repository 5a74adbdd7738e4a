//! Secret store access.
//!
//! The pipeline only needs two read operations from a store: fetch one
//! secret value by name, and list the store one page at a time.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`, `gcp.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! #[async_trait]
//! impl SecretStore for Vault {
//!     fn name(&self) -> &'static str {
//!         "vault"
//!     }
//!     async fn get_secret_value(&self, name: &str) -> Result<SecretValue> {
//!         // Read the secret's current version
//!     }
//!     async fn list_secrets_page(&self, next_token: Option<&str>) -> Result<SecretPage> {
//!         // One page of the listing
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::core::types::{SecretPage, SecretValue};
use crate::error::Result;

mod aws;
mod memory;

pub use aws::AwsSecretsManager;
pub use memory::MemoryStore;

/// Read access to a secret store.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Short store name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the current value of a secret.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the secret does not exist and
    /// `Error::StoreUnavailable` for every other failure.
    async fn get_secret_value(&self, name: &str) -> Result<SecretValue>;

    /// Fetch one page of the secret listing.
    ///
    /// `next_token` is `None` for the first page and the previous page's
    /// continuation token afterwards.
    ///
    /// # Errors
    ///
    /// Returns `Error::StoreUnavailable` if the request fails.
    async fn list_secrets_page(&self, next_token: Option<&str>) -> Result<SecretPage>;
}
