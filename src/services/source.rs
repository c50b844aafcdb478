// src/services/source.rs

//! Board page source.
//!
//! Fetches the raw HTML of the posting board. The trait seam exists so the
//! cycle orchestrator can run against a scripted source in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::Config;

/// A source of raw board documents.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the current document text. Any transport error or non-success
    /// status is reported as an error.
    async fn fetch(&self) -> Result<String>;
}

/// HTTP page source backed by a shared [`reqwest::Client`].
pub struct HttpSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            url: config.source_url.clone(),
            timeout: Duration::from_secs(config.http.timeout_secs),
        }
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
