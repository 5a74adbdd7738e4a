//! In-memory platform that records every call.

use std::sync::Mutex;

use super::Platform;
use crate::error::{Error, Result};

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Mask(String),
    Warning(String),
    Export(String, String),
    Failed(String),
}

/// Platform that keeps calls in memory.
#[derive(Debug, Default)]
pub struct Recording {
    events: Mutex<Vec<Event>>,
    reject_exports: bool,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `export_variable` call fail.
    pub fn rejecting_exports() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            reject_exports: true,
        }
    }

    /// All calls so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Exported variables, in order.
    pub fn exports(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Export(name, value) => Some((name, value)),
                _ => None,
            })
            .collect()
    }

    /// Masked values, in order.
    pub fn masked(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Mask(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    /// Failure messages, in order.
    pub fn failures(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Failed(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| Error::Platform("event log poisoned".into()))?
            .push(event);
        Ok(())
    }
}

impl Platform for Recording {
    fn set_secret(&self, value: &str) -> Result<()> {
        self.record(Event::Mask(value.to_string()))
    }

    fn warning(&self, message: &str) -> Result<()> {
        self.record(Event::Warning(message.to_string()))
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        if self.reject_exports {
            return Err(Error::Platform(format!("cannot export '{}'", name)));
        }
        self.record(Event::Export(name.to_string(), value.to_string()))
    }

    fn set_failed(&self, message: &str) -> Result<()> {
        self.record(Event::Failed(message.to_string()))
    }
}
