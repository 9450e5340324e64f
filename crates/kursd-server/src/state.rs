//! Shared application state and process setup.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kursd_feed::{ClientConfig, FeedClient, SnapshotCache};
use kursd_limiter::{FixedWindowLimiter, SlidingWindowLimiter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;
use crate::telegram::TelegramNotifier;

/// Both endpoint budgets reset over this window.
const RATE_WINDOW: Duration = Duration::from_secs(60);

/// Shared state behind every handler.
#[derive(Debug)]
pub struct AppState {
    /// Runtime configuration the state was built from.
    pub config: Config,
    /// Client for the upstream daily feed.
    pub feed: FeedClient,
    /// Snapshot cache keyed by trading date.
    pub cache: SnapshotCache,
    /// Per-client budget for the currency endpoint.
    pub currency_limiter: SlidingWindowLimiter,
    /// Per-client budget for the contact endpoint.
    pub contact_limiter: FixedWindowLimiter,
    /// Lead delivery channel.
    pub notifier: TelegramNotifier,
}

/// Initializes the global tracing subscriber.
///
/// `KURSD_LOG_FORMAT=json` switches to JSON output. The filter honors
/// `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let log_format = std::env::var("KURSD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

/// Builds the shared state from configuration.
///
/// # Errors
///
/// Returns an error if the upstream HTTP client cannot be constructed.
pub fn build_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let feed = FeedClient::new(ClientConfig {
        feed_url: config.feed_url.clone(),
        ..ClientConfig::default()
    })
    .context("failed to build feed client")?;

    let cache = SnapshotCache::new(config.cache_ttl);
    let currency_limiter = SlidingWindowLimiter::new(config.rate_limit, RATE_WINDOW);
    let contact_limiter = FixedWindowLimiter::new(config.contact_rate_limit, RATE_WINDOW);
    let notifier =
        TelegramNotifier::new(config.telegram_token.clone(), config.telegram_chat_id.clone())
            .with_api_base(config.telegram_api_base.clone());

    Ok(Arc::new(AppState {
        config,
        feed,
        cache,
        currency_limiter,
        contact_limiter,
        notifier,
    }))
}
