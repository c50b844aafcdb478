// src/pipeline/cycle.rs

//! Cycle orchestration.
//!
//! One cycle runs fetch → fingerprint check → extract → diff → dispatch →
//! persist, strictly in order, with every anticipated failure ending the
//! cycle early instead of crashing the process. [`Watcher::run`] repeats
//! cycles on a fixed interval indefinitely.

use std::time::Duration;

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::diff::find_new;
use crate::pipeline::fingerprint::fingerprint;
use crate::services::extract::extract_jobs;
use crate::services::source::PageSource;
use crate::services::webhook::Notifier;
use crate::storage::CacheStore;

/// Outcome of a single cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    /// The board could not be fetched; nothing else ran.
    FetchFailed,
    /// Content fingerprint matched the snapshot; parsing skipped.
    Unchanged,
    /// The posting table was absent; snapshot untouched.
    ExtractionFailed,
    /// Extraction yielded zero postings; snapshot untouched.
    EmptyScrape,
    /// The full pipeline ran.
    Completed {
        total: usize,
        new: usize,
        notified: usize,
    },
}

impl CycleReport {
    /// One-line human summary for CLI output.
    pub fn summary(&self) -> String {
        match self {
            Self::FetchFailed => "fetch failed; will retry next cycle".to_string(),
            Self::Unchanged => "no change detected".to_string(),
            Self::ExtractionFailed => "posting table missing; cache untouched".to_string(),
            Self::EmptyScrape => "scrape yielded no postings; cache untouched".to_string(),
            Self::Completed {
                total,
                new,
                notified,
            } => format!("{total} postings visible, {new} new, {notified} notified"),
        }
    }
}

/// Sequences the scrape pipeline against a page source and a notifier.
pub struct Watcher<S: PageSource, N: Notifier> {
    config: Config,
    source: S,
    notifier: N,
    cache: CacheStore,
}

impl<S: PageSource, N: Notifier> Watcher<S, N> {
    pub fn new(config: Config, source: S, notifier: N, cache: CacheStore) -> Self {
        Self {
            config,
            source,
            notifier,
            cache,
        }
    }

    /// Run a single scrape cycle.
    ///
    /// Anticipated failures (fetch, absent table, empty scrape) are reported
    /// inside `Ok(..)` and leave the snapshot untouched; only unanticipated
    /// errors escape as `Err`. The snapshot is saved with the full current
    /// posting set regardless of delivery outcome, so a posting whose
    /// notification failed is recorded as seen and is not retried on the
    /// next cycle.
    pub async fn run_once(&self) -> Result<CycleReport> {
        log::info!("Starting job scraping cycle...");

        let html = match self.source.fetch().await {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to fetch page content: {e}");
                return Ok(CycleReport::FetchFailed);
            }
        };

        let current_hash = fingerprint(html.as_bytes());
        let cache = self.cache.load().await;

        if current_hash == cache.content_hash {
            log::info!("No changes detected in page content");
            return Ok(CycleReport::Unchanged);
        }

        // An empty or malformed scrape must not overwrite a good snapshot:
        // every previously seen posting would look new on the next cycle.
        let current_jobs = match extract_jobs(&html) {
            Ok(jobs) => jobs,
            Err(e) => {
                log::warn!("Extraction failed: {e}");
                return Ok(CycleReport::ExtractionFailed);
            }
        };
        if current_jobs.is_empty() {
            log::warn!("No jobs found in current scrape");
            return Ok(CycleReport::EmptyScrape);
        }

        let new_jobs = find_new(&current_jobs, &cache.jobs);
        let mut notified = 0;

        if new_jobs.is_empty() {
            log::info!("No new jobs found");
        } else {
            log::info!("Found {} new job postings", new_jobs.len());
            let rate_delay = Duration::from_secs(self.config.notify.rate_delay_secs);

            for job in &new_jobs {
                if self.notifier.notify(job).await {
                    notified += 1;
                    tokio::time::sleep(rate_delay).await;
                } else {
                    log::warn!(
                        "Failed to send notification for {} - {}",
                        job.company,
                        job.role
                    );
                }
            }
        }

        if let Err(e) = self.cache.save(&current_hash, &current_jobs).await {
            log::error!("Error saving cache: {e}");
        }

        log::info!("Scraping cycle completed");
        Ok(CycleReport::Completed {
            total: current_jobs.len(),
            new: new_jobs.len(),
            notified,
        })
    }

    /// Run cycles forever on the configured interval.
    ///
    /// An error escaping a cycle is logged and followed by the short
    /// cooldown instead of the full interval; the loop itself never exits.
    pub async fn run(&self) {
        log::info!(
            "Starting continuous job scraping every {} minutes",
            self.config.interval_minutes
        );

        loop {
            let delay = match self.run_once().await {
                Ok(_) => Duration::from_secs(self.config.interval_minutes * 60),
                Err(e) => {
                    log::error!("Unexpected error in scraping cycle: {e}");
                    log::info!("Continuing after error...");
                    Duration::from_secs(self.config.cooldown_secs)
                }
            };

            log::info!("Sleeping for {} seconds...", delay.as_secs());
            tokio::time::sleep(delay).await;
        }
    }
}
