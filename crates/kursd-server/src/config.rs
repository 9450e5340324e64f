//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use kursd_feed::url::FEED_URL;

use crate::telegram::DEFAULT_API_BASE;

const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_RATE_LIMIT: usize = 10;
const DEFAULT_CONTACT_RATE_LIMIT: u32 = 3;

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the server binds to.
    pub listen_addr: SocketAddr,
    /// URL of the upstream daily rates feed.
    pub feed_url: String,
    /// Snapshot cache lifetime. Zero disables caching.
    pub cache_ttl: Duration,
    /// Requests per minute allowed on the currency endpoint, per client.
    pub rate_limit: usize,
    /// Requests per minute allowed on the contact endpoint, per client.
    pub contact_rate_limit: u32,
    /// Telegram bot token used for lead delivery.
    pub telegram_token: Option<String>,
    /// Telegram chat the leads are sent to.
    pub telegram_chat_id: Option<String>,
    /// Base URL of the Telegram Bot API.
    pub telegram_api_base: String,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Unset variables fall back to their defaults.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `KURSD_LISTEN` | `0.0.0.0:8080` |
    /// | `KURSD_FEED_URL` | the public daily feed |
    /// | `KURSD_CACHE_TTL_SECS` | `3600` |
    /// | `KURSD_RATE_LIMIT` | `10` |
    /// | `KURSD_CONTACT_RATE_LIMIT` | `3` |
    /// | `TELEGRAM_BOT_TOKEN` | unset |
    /// | `TELEGRAM_CHAT_ID` | unset |
    /// | `TELEGRAM_API_BASE` | `https://api.telegram.org` |
    ///
    /// # Panics
    ///
    /// Panics if `KURSD_LISTEN` is set but does not parse as a socket
    /// address.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr = std::env::var("KURSD_LISTEN")
            .unwrap_or_else(|_| DEFAULT_LISTEN.to_string())
            .parse()
            .expect("Invalid KURSD_LISTEN");

        let feed_url =
            std::env::var("KURSD_FEED_URL").unwrap_or_else(|_| FEED_URL.to_string());

        let cache_ttl_secs = std::env::var("KURSD_CACHE_TTL_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let rate_limit = std::env::var("KURSD_RATE_LIMIT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT);

        let contact_rate_limit = std::env::var("KURSD_CONTACT_RATE_LIMIT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_CONTACT_RATE_LIMIT);

        let telegram_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|value| !value.is_empty());
        let telegram_chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .filter(|value| !value.is_empty());
        let telegram_api_base = std::env::var("TELEGRAM_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self {
            listen_addr,
            feed_url,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            rate_limit,
            contact_rate_limit,
            telegram_token,
            telegram_chat_id,
            telegram_api_base,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            feed_url: FEED_URL.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            rate_limit: DEFAULT_RATE_LIMIT,
            contact_rate_limit: DEFAULT_CONTACT_RATE_LIMIT,
            telegram_token: None,
            telegram_chat_id: None,
            telegram_api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.feed_url, FEED_URL);
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.rate_limit, 10);
        assert_eq!(config.contact_rate_limit, 3);
        assert!(config.telegram_token.is_none());
        assert!(config.telegram_chat_id.is_none());
        assert_eq!(config.telegram_api_base, "https://api.telegram.org");
    }
}
