//! Error types for smenv.
//!
//! Store, decode, config and platform failures each get a variant so the
//! runner can report them verbatim and the binary can pick an exit hint.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Any failure talking to the secret store, rendered verbatim.
    ///
    /// Covers network errors, permission problems and decryption failures.
    #[error("{operation} failed: {message}")]
    StoreUnavailable { operation: String, message: String },

    /// The named secret does not exist in the store.
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The CI platform rejected a command.
    #[error("platform error: {0}")]
    Platform(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Some secrets failed; each failure has already been reported.
    #[error("{failed} of {total} secrets could not be injected")]
    Failed { failed: usize, total: usize },
}

impl Error {
    /// Build a store error for the given operation.
    pub fn store(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from the secret store.
    ///
    /// `NotFound` counts: callers treat a missing secret like any other
    /// store failure.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. } | Self::NotFound(_))
    }
}

/// Failures turning a binary secret into text.
#[derive(Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("secret '{name}' is not valid base64: {reason}")]
    InvalidBase64 { name: String, reason: String },

    #[error("secret '{name}' decodes to non-ASCII data at byte {position}")]
    NotAscii { name: String, position: usize },
}

/// Invalid step inputs.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("no secret names given in '{0}'")]
    NoSecrets(&'static str),

    #[error("invalid secret pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
