// src/services/webhook.rs

//! Discord webhook notification dispatch.
//!
//! Maps one posting to one embed message and delivers it. Delivery never
//! raises: transport failures are logged and reported as `false` so one bad
//! send cannot take down a cycle.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::{Config, JobPosting};
use crate::utils::{is_http_url, truncate_graphemes};

const USERNAME: &str = "Job Alert Bot";
const AVATAR_URL: &str =
    "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";
const FOOTER_TEXT: &str = "Job Scraper Bot • Summer 2026 Internships";
const COLOR_GREEN: u32 = 0x00FF00;

// Discord embed limits.
const TITLE_LIMIT: usize = 256;
const FIELD_VALUE_LIMIT: usize = 1024;

/// A sink for posting notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message for `job`. Returns whether delivery succeeded;
    /// never propagates an error.
    async fn notify(&self, job: &JobPosting) -> bool;
}

/// A field in a Discord embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// The footer of a Discord embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A Discord embed structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

/// Top-level webhook request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

/// Webhook dispatcher backed by a shared [`reqwest::Client`].
pub struct DiscordWebhook {
    client: Client,
    webhook_url: String,
    timeout: Duration,
}

impl DiscordWebhook {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            webhook_url: config.webhook_url.clone(),
            timeout: Duration::from_secs(config.notify.timeout_secs),
        }
    }

    /// Build the webhook body for a posting.
    pub fn build_payload(job: &JobPosting) -> WebhookPayload {
        // Link becomes a clickable phrase only when it is an actual URL;
        // the "No link available" placeholder is passed through as-is.
        let link_text = if is_http_url(&job.apply_link) {
            format!("[Apply Here]({})", job.apply_link)
        } else {
            job.apply_link.clone()
        };

        let fields = vec![
            field("🏢 Company", &job.company, true),
            field("💼 Role", &job.role, true),
            field("📍 Location", &job.location, true),
            field("🔗 Application Link", &link_text, false),
            field("📅 Date Posted", &job.date_posted, true),
        ];

        let embed = Embed {
            title: truncate_graphemes(&format!("🎯 New Job Posting: {}", job.role), TITLE_LIMIT),
            description: format!("**{}** has posted a new internship opportunity!", job.company),
            color: COLOR_GREEN,
            fields,
            footer: EmbedFooter {
                text: FOOTER_TEXT.to_string(),
                icon_url: Some(AVATAR_URL.to_string()),
            },
            timestamp: Utc::now().to_rfc3339(),
        };

        WebhookPayload {
            username: USERNAME.to_string(),
            avatar_url: AVATAR_URL.to_string(),
            embeds: vec![embed],
        }
    }
}

fn field(name: &str, value: &str, inline: bool) -> EmbedField {
    EmbedField {
        name: name.to_string(),
        value: truncate_graphemes(value, FIELD_VALUE_LIMIT),
        inline,
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    async fn notify(&self, job: &JobPosting) -> bool {
        let payload = Self::build_payload(job);
        let result = self
            .client
            .post(&self.webhook_url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match result {
            Ok(_) => {
                log::info!(
                    "Sent notification for {} - {}",
                    job.company,
                    job.role
                );
                true
            }
            Err(e) => {
                log::error!("Error sending webhook notification: {e}");
                false
            }
        }
    }
}
