// src/models/mod.rs

//! Domain models for the watcher application.

mod config;
mod posting;
mod snapshot;

// Re-export all public types
pub use config::{Config, HttpConfig, NotifyConfig};
pub use posting::{JobPosting, NO_LINK, NOT_SPECIFIED};
pub use snapshot::Snapshot;
