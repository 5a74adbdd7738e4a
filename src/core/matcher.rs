//! Wildcard matching of secret names.
//!
//! `*` matches zero or more of any character, `/` included. Every other
//! character is literal.

use regex::Regex;

use crate::core::constants::WILDCARD;
use crate::error::{ConfigError, Result};

/// A compiled name pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern into an anchored full-string match.
    ///
    /// # Errors
    ///
    /// Only fails when the compiled pattern exceeds the regex size limit.
    pub fn new(pattern: &str) -> Result<Self> {
        let body = pattern
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        // (?s) so `.` also matches newlines inside odd names
        let regex =
            Regex::new(&format!("(?s)^{}$", body)).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Whether the pattern contains a wildcard.
    pub fn is_wildcard(&self) -> bool {
        has_wildcard(&self.source)
    }

    /// Whether `candidate` matches the whole pattern.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Candidates matching the pattern, in candidate order.
    pub fn filter<'a, I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        candidates
            .into_iter()
            .map(|c| AsRef::<str>::as_ref(c))
            .filter(|c| self.is_match(c))
            .map(str::to_string)
            .collect()
    }
}

/// Whether a name pattern contains a wildcard.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(WILDCARD)
}

/// Subset of `candidates` fully matching `pattern`.
pub fn matches<S: AsRef<str>>(candidates: &[S], pattern: &str) -> Result<Vec<String>> {
    Ok(Pattern::new(pattern)?.filter(candidates))
}
