//! In-memory secret store.
//!
//! Serves a fixed set of secrets with configurable page size and records
//! how it was called. Backs the unit and integration tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::SecretStore;
use crate::core::types::{SecretDescriptor, SecretPage, SecretValue};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    value: SecretValue,
    deleted: bool,
}

/// Secret store backed by a vector.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Vec<Entry>,
    page_size: usize,
    fail_listing: bool,
    failing: HashSet<String>,
    list_calls: AtomicUsize,
    fetched: Mutex<Vec<String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store with 100 secrets per page.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            page_size: 100,
            fail_listing: false,
            failing: HashSet::new(),
            list_calls: AtomicUsize::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Add a text secret.
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.push(name, SecretValue::Text(value.to_string()), false);
        self
    }

    /// Add a binary secret.
    pub fn with_binary(mut self, name: &str, value: &[u8]) -> Self {
        self.push(name, SecretValue::Binary(value.to_vec()), false);
        self
    }

    /// Add a secret scheduled for deletion.
    ///
    /// It shows up in listings flagged as deleted and cannot be fetched.
    pub fn with_deleted(mut self, name: &str) -> Self {
        self.push(name, SecretValue::Text(String::new()), true);
        self
    }

    /// Number of descriptors per listing page (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Make every listing request fail.
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Make fetching `name` fail with a store error.
    pub fn failing_fetch(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Number of page requests served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Names passed to `get_secret_value` so far, in call order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched
            .lock()
            .map(|names| names.clone())
            .unwrap_or_default()
    }

    fn push(&mut self, name: &str, value: SecretValue, deleted: bool) {
        self.entries.retain(|e| e.name != name);
        self.entries.push(Entry {
            name: name.to_string(),
            value,
            deleted,
        });
    }
}

#[async_trait]
impl SecretStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_secret_value(&self, name: &str) -> Result<SecretValue> {
        if let Ok(mut fetched) = self.fetched.lock() {
            fetched.push(name.to_string());
        }

        if self.failing.contains(name) {
            return Err(Error::store(
                "GetSecretValue",
                format!("DecryptionFailure: cannot decrypt '{}'", name),
            ));
        }

        self.entries
            .iter()
            .find(|e| e.name == name && !e.deleted)
            .map(|e| e.value.clone())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    async fn list_secrets_page(&self, next_token: Option<&str>) -> Result<SecretPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_listing {
            return Err(Error::store("ListSecrets", "service unavailable"));
        }

        let start = match next_token {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| Error::store("ListSecrets", format!("invalid token '{}'", token)))?,
        };
        let end = (start + self.page_size).min(self.entries.len());

        let secrets = self.entries[start.min(end)..end]
            .iter()
            .map(|e| SecretDescriptor {
                name: e.name.clone(),
                deleted: e.deleted,
            })
            .collect();
        let next_token = (end < self.entries.len()).then(|| end.to_string());

        Ok(SecretPage {
            secrets,
            next_token,
        })
    }
}
