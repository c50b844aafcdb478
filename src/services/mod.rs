// src/services/mod.rs

//! External collaborators: page source, table extraction, webhook sink.

pub mod extract;
pub mod source;
pub mod webhook;

pub use extract::{CONTINUATION_MARK, extract_jobs};
pub use source::{HttpSource, PageSource};
pub use webhook::{DiscordWebhook, Notifier};
