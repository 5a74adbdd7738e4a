//! CI platform primitives.
//!
//! The publisher and runner talk to the CI system only through the
//! `Platform` trait: mask a value, show a warning, export a variable,
//! mark the run as failed.
//!
//! - `GitHubActions`: workflow commands on stdout plus the `GITHUB_ENV` file
//! - `Recording`: keeps every call in memory, for tests

use crate::error::Result;

mod github;
mod recording;

pub use github::GitHubActions;
pub use recording::{Event, Recording};

/// Output primitives of a CI platform.
///
/// Implementations must be safe to call from concurrently running secret
/// branches.
pub trait Platform: Send + Sync {
    /// Register a value to be redacted from all later log output.
    fn set_secret(&self, value: &str) -> Result<()>;

    /// Show a warning annotation.
    fn warning(&self, message: &str) -> Result<()>;

    /// Make `name=value` visible to the following pipeline steps.
    fn export_variable(&self, name: &str, value: &str) -> Result<()>;

    /// Report an error and mark the run as failed.
    fn set_failed(&self, message: &str) -> Result<()>;
}
