//! HTTP client for the daily rate feed.

use std::time::Duration;

use bytes::Bytes;
use chrono::NaiveDate;
use kursd_types::RateSnapshot;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::decode::decode_feed;
use crate::parse::parse_snapshot;
use crate::url::{FEED_URL, daily_url};

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the daily XML feed.
    pub feed_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: "Mozilla/5.0 (compatible; CurrencyBot/1.0)".to_string(),
        }
    }
}

/// Errors that can occur while fetching the feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Feed request timed out after {0:?}")]
    Timeout(Duration),

    /// Server returned an error status.
    #[error("Feed returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

/// HTTP client with connection pooling for the daily feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: ClientConfig,
}

impl FeedClient {
    /// Creates a new feed client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the raw feed body for the given trading date.
    ///
    /// The body is windows-1251 encoded XML.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the server
    /// responds with a non-success status.
    pub async fn fetch_raw(&self, date: NaiveDate) -> Result<Bytes, FeedError> {
        let url = daily_url(&self.config.feed_url, date);
        debug!(%url, "fetching daily feed");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(|e| self.map_error(e))
    }

    /// Fetches and parses the snapshot for the given trading date.
    ///
    /// The caller is responsible for passing a working day; the feed
    /// answers requests for non-working days with the previous day's data
    /// under the requested date.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the server
    /// responds with a non-success status.
    pub async fn fetch_snapshot(&self, date: NaiveDate) -> Result<RateSnapshot, FeedError> {
        let body = self.fetch_raw(date).await?;
        let text = decode_feed(&body);
        let snapshot = parse_snapshot(&text, date);
        debug!(date = %date, records = snapshot.len(), "parsed daily snapshot");
        Ok(snapshot)
    }

    /// Maps reqwest timeouts onto the dedicated error variant.
    fn map_error(&self, error: reqwest::Error) -> FeedError {
        if error.is_timeout() {
            FeedError::Timeout(self.config.timeout)
        } else {
            FeedError::Http(error)
        }
    }
}
