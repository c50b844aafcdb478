// src/storage/cache.rs

//! File-backed snapshot cache.
//!
//! The cache file is the only cross-cycle state. Any unreadable state
//! degrades to the empty snapshot instead of failing, and writes go through
//! a temp file + rename so a crashed write never leaves a half-written file
//! readable as valid.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{JobPosting, Snapshot};

/// Durable store for the last observed [`Snapshot`].
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the cached snapshot.
    ///
    /// A missing file, an empty file, or contents that fail to parse are all
    /// recoverable: the empty snapshot is returned and the condition logged.
    pub async fn load(&self) -> Snapshot {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Cache file not found, starting fresh");
                return Snapshot::empty();
            }
            Err(e) => {
                log::warn!("Failed to read cache file {:?}: {e}", self.path);
                return Snapshot::empty();
            }
        };

        if bytes.is_empty() {
            log::info!("Cache file empty, starting fresh");
            return Snapshot::empty();
        }

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("Invalid cache file format, starting fresh: {e}");
                Snapshot::empty()
            }
        }
    }

    /// Persist a new snapshot, replacing the previous one wholesale.
    pub async fn save(&self, content_hash: &str, jobs: &[JobPosting]) -> Result<()> {
        let snapshot = Snapshot::new(content_hash, jobs.to_vec());
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        self.write_atomic(&bytes).await?;
        log::info!("Cache saved with {} jobs", jobs.len());
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_jobs() -> Vec<JobPosting> {
        vec![JobPosting {
            company: "Acme".to_string(),
            role: "SWE Intern".to_string(),
            location: "Remote".to_string(),
            apply_link: "https://acme.test/apply".to_string(),
            date_posted: "Jan 1".to_string(),
        }]
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("cache.json"));

        let snapshot = store.load().await;
        assert!(snapshot.content_hash.is_empty());
        assert!(snapshot.jobs.is_empty());
    }

    #[tokio::test]
    async fn empty_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        tokio::fs::write(&path, b"").await.unwrap();

        let snapshot = CacheStore::new(&path).load().await;
        assert!(snapshot.content_hash.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let snapshot = CacheStore::new(&path).load().await;
        assert!(snapshot.content_hash.is_empty());
        assert!(snapshot.jobs.is_empty());
    }

    #[tokio::test]
    async fn wrong_shape_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        tokio::fs::write(&path, br#"{ "content_hash": 42 }"#)
            .await
            .unwrap();

        let snapshot = CacheStore::new(&path).load().await;
        assert!(snapshot.content_hash.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("cache.json"));

        store.save("abc123", &sample_jobs()).await.unwrap();
        let snapshot = store.load().await;

        assert_eq!(snapshot.content_hash, "abc123");
        assert_eq!(snapshot.jobs, sample_jobs());
    }

    #[tokio::test]
    async fn save_replaces_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("cache.json"));

        store.save("v1", &sample_jobs()).await.unwrap();
        store.save("v2", &[]).await.unwrap();

        let snapshot = store.load().await;
        assert_eq!(snapshot.content_hash, "v2");
        assert!(snapshot.jobs.is_empty());
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        let store = CacheStore::new(&path);

        store.save("abc", &sample_jobs()).await.unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/state/cache.json");
        let store = CacheStore::new(&path);

        store.save("abc", &sample_jobs()).await.unwrap();
        assert!(path.exists());
    }
}
