//! Core library components.
//!
//! Name resolution, value normalization and publishing, plus the store and
//! platform seams they run against.

pub mod config;
pub mod constants;
pub mod lister;
pub mod matcher;
pub mod normalize;
pub mod platform;
pub mod posix;
pub mod publish;
pub mod resolver;
pub mod store;
pub mod types;
