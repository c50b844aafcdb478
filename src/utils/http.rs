// src/utils/http.rs

//! HTTP client utilities.

use crate::error::Result;
use crate::models::HttpConfig;

/// Create the configured HTTP client shared by fetch and notify.
///
/// Fetch and notify use different request timeouts, so timeouts are applied
/// per request rather than on the client.
pub fn create_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()?;
    Ok(client)
}
