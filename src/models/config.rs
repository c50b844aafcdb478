//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Discord webhook URL to deliver notifications to (required)
    #[serde(default)]
    pub webhook_url: String,

    /// URL of the posting board page
    #[serde(default = "defaults::source_url")]
    pub source_url: String,

    /// Minutes between scrape cycles
    #[serde(default = "defaults::interval_minutes")]
    pub interval_minutes: u64,

    /// Seconds to wait after an unexpected cycle failure before retrying
    #[serde(default = "defaults::cooldown_secs")]
    pub cooldown_secs: u64,

    /// Location of the snapshot cache file
    #[serde(default = "defaults::cache_path")]
    pub cache_path: PathBuf,

    /// HTTP fetch behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Notification delivery settings
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply environment-variable overrides on top of file/default values.
    ///
    /// Recognized variables: `DISCORD_WEBHOOK_URL`, `GITHUB_URL`,
    /// `SCRAPE_INTERVAL` (minutes), `CACHE_FILE`.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("DISCORD_WEBHOOK_URL") {
            self.webhook_url = url;
        }
        if let Ok(url) = std::env::var("GITHUB_URL") {
            self.source_url = url;
        }
        if let Ok(interval) = std::env::var("SCRAPE_INTERVAL") {
            match interval.parse::<u64>() {
                Ok(minutes) => self.interval_minutes = minutes,
                Err(_) => log::warn!("Ignoring non-numeric SCRAPE_INTERVAL: {interval:?}"),
            }
        }
        if let Ok(path) = std::env::var("CACHE_FILE") {
            self.cache_path = PathBuf::from(path);
        }
    }

    /// Validate configuration values for basic sanity.
    ///
    /// A missing webhook URL is the one fatal startup condition.
    pub fn validate(&self) -> Result<()> {
        if self.webhook_url.trim().is_empty() {
            return Err(AppError::config(
                "webhook_url is required (set DISCORD_WEBHOOK_URL)",
            ));
        }
        if self.source_url.trim().is_empty() {
            return Err(AppError::config("source_url is empty"));
        }
        if self.interval_minutes == 0 {
            return Err(AppError::config("interval_minutes must be > 0"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.notify.timeout_secs == 0 {
            return Err(AppError::config("notify.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            source_url: defaults::source_url(),
            interval_minutes: defaults::interval_minutes(),
            cooldown_secs: defaults::cooldown_secs(),
            cache_path: defaults::cache_path(),
            http: HttpConfig::default(),
            notify: NotifyConfig::default(),
        }
    }
}

/// HTTP client behavior for fetching the board page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Fetch request timeout in seconds
    #[serde(default = "defaults::fetch_timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::fetch_timeout(),
        }
    }
}

/// Notification delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Webhook request timeout in seconds
    #[serde(default = "defaults::notify_timeout")]
    pub timeout_secs: u64,

    /// Delay between consecutive successful deliveries, in seconds
    #[serde(default = "defaults::rate_delay")]
    pub rate_delay_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::notify_timeout(),
            rate_delay_secs: defaults::rate_delay(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn source_url() -> String {
        "https://github.com/vanshb03/Summer2026-Internships".into()
    }
    pub fn interval_minutes() -> u64 {
        15
    }
    pub fn cooldown_secs() -> u64 {
        60
    }
    pub fn cache_path() -> PathBuf {
        PathBuf::from("job_cache.json")
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
    }
    pub fn fetch_timeout() -> u64 {
        30
    }
    pub fn notify_timeout() -> u64 {
        10
    }
    pub fn rate_delay() -> u64 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Config {
        Config {
            webhook_url: "https://discord.com/api/webhooks/1/abc".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn validate_requires_webhook_url() {
        let config = Config::default();
        assert!(config.validate().is_err());
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let mut config = configured();
        config.interval_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_user_agent() {
        let mut config = configured();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn defaults_match_source_board() {
        let config = Config::default();
        assert_eq!(config.interval_minutes, 15);
        assert_eq!(config.cache_path, PathBuf::from("job_cache.json"));
        assert!(config.source_url.contains("Summer2026-Internships"));
    }

    #[test]
    fn toml_partial_fills_defaults() {
        let config: Config =
            toml::from_str("webhook_url = \"https://example.com/hook\"").unwrap();
        assert_eq!(config.interval_minutes, 15);
        assert_eq!(config.notify.rate_delay_secs, 2);
        assert_eq!(config.webhook_url, "https://example.com/hook");
    }
}
