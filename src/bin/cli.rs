//! jobwatch CLI
//!
//! Watches the configured posting board and announces new postings to a
//! Discord webhook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobwatch::{
    error::Result,
    models::Config,
    pipeline::Watcher,
    services::{DiscordWebhook, HttpSource},
    storage::CacheStore,
    utils::http,
};

/// jobwatch - Internship posting watcher
#[derive(Parser, Debug)]
#[command(
    name = "jobwatch",
    version,
    about = "Watches an internship posting board and announces new jobs via Discord webhook"
)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the cache file location
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watch the board continuously
    Watch,

    /// Run a single scrape cycle and exit
    Once,

    /// Validate configuration
    Validate,

    /// Show current cache snapshot info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_watcher(config: Config) -> Result<Watcher<HttpSource, DiscordWebhook>> {
    let client = http::create_client(&config.http)?;
    let source = HttpSource::new(&config, client.clone());
    let notifier = DiscordWebhook::new(&config, client);
    let cache = CacheStore::new(&config.cache_path);
    Ok(Watcher::new(config, source, notifier, cache))
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    config.apply_env();
    if let Some(cache) = cli.cache {
        config.cache_path = cache;
    }

    match cli.command {
        Command::Watch => {
            config.validate()?;
            log::info!("jobwatch starting...");

            let watcher = build_watcher(config)?;
            tokio::select! {
                _ = watcher.run() => {}
                _ = tokio::signal::ctrl_c() => {
                    log::info!("Scraper stopped by user");
                }
            }
        }

        Command::Once => {
            config.validate()?;
            let watcher = build_watcher(config)?;
            let report = watcher.run_once().await?;
            log::info!("Cycle result: {}", report.summary());
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Configuration OK");
        }

        Command::Info => {
            log::info!("Cache file: {}", config.cache_path.display());

            let snapshot = CacheStore::new(&config.cache_path).load().await;
            if snapshot.content_hash.is_empty() {
                log::info!("No snapshot found yet.");
            } else {
                log::info!("Content hash: {}", snapshot.content_hash);
                log::info!("Cached jobs: {}", snapshot.jobs.len());
                log::info!("Last updated: {}", snapshot.last_updated);
            }
        }
    }

    Ok(())
}
