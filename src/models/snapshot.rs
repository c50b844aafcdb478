//! Persisted snapshot of the last observed board state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::posting::JobPosting;

/// The durable pairing of a content fingerprint and the postings it produced.
///
/// Invariant: `content_hash` is always the digest of the exact document that
/// `jobs` was extracted from; the two are only ever replaced together.
///
/// Every field carries `#[serde(default)]` so cache files written by older
/// builds with missing keys still deserialize instead of being discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Digest of the raw document content
    #[serde(default)]
    pub content_hash: String,

    /// All postings visible in that document, oldest first
    #[serde(default)]
    pub jobs: Vec<JobPosting>,

    /// When this snapshot was written
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Snapshot {
    /// The valid initial state when no cache exists or it cannot be read.
    pub fn empty() -> Self {
        Self {
            content_hash: String::new(),
            jobs: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn new(content_hash: impl Into<String>, jobs: Vec<JobPosting>) -> Self {
        Self {
            content_hash: content_hash.into(),
            jobs,
            last_updated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_blank_hash() {
        let snap = Snapshot::empty();
        assert!(snap.content_hash.is_empty());
        assert!(snap.jobs.is_empty());
    }

    #[test]
    fn deserializes_with_missing_keys() {
        // Cache written by an older build: no last_updated key.
        let json = r#"{ "content_hash": "abc", "jobs": [] }"#;
        let snap: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.content_hash, "abc");
    }

    #[test]
    fn deserializes_fully_empty_object() {
        let snap: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snap.content_hash.is_empty());
        assert!(snap.jobs.is_empty());
    }
}
