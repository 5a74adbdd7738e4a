//! Domain types shared by the store, normalizer and publisher.

use indexmap::IndexMap;

/// A secret name as known to the store (e.g. `prod/db/password`).
pub type SecretName = String;

/// Derived environment variables of one secret, in insertion order.
///
/// Keys are unique; inserting an existing key replaces its value in place.
pub type VariableMap = IndexMap<String, String>;

/// One entry of a store listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDescriptor {
    pub name: SecretName,
    /// Scheduled for deletion; never fetched.
    pub deleted: bool,
}

impl SecretDescriptor {
    /// A live (non-deleted) descriptor.
    pub fn live(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deleted: false,
        }
    }

    /// A soft-deleted descriptor.
    pub fn deleted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deleted: true,
        }
    }
}

/// One page of a store listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretPage {
    pub secrets: Vec<SecretDescriptor>,
    /// Continuation token; `None` on the last page.
    pub next_token: Option<String>,
}

/// A fetched secret value. Exactly one representation per fetch.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretValue {
    Text(String),
    /// Base64 text stored as a binary secret.
    Binary(Vec<u8>),
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "Text(<{} bytes redacted>)", s.len()),
            Self::Binary(b) => write!(f, "Binary(<{} bytes redacted>)", b.len()),
        }
    }
}
