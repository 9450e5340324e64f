//! In-memory caching of daily snapshots.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use kursd_types::RateSnapshot;
use tracing::debug;

use crate::client::{FeedClient, FeedError};

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: RateSnapshot,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheInner {
    map: HashMap<NaiveDate, CacheEntry>,
    ttl: Duration,
}

impl CacheInner {
    fn new(ttl: Duration) -> Self {
        Self {
            map: HashMap::new(),
            ttl,
        }
    }

    fn get(&self, date: NaiveDate) -> Option<RateSnapshot> {
        self.map.get(&date).and_then(|entry| {
            if Instant::now() <= entry.expires_at {
                Some(entry.snapshot.clone())
            } else {
                None
            }
        })
    }

    fn insert(&mut self, date: NaiveDate, snapshot: RateSnapshot) {
        let expires_at = Instant::now() + self.ttl;
        let entry = CacheEntry {
            snapshot,
            expires_at,
        };
        self.map.insert(date, entry);
    }

    fn clear_expired(&mut self) {
        let now = Instant::now();
        self.map.retain(|_, entry| entry.expires_at > now);
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Thread-safe cache of daily snapshots keyed by trading date.
///
/// Rates for a finished trading day never change, so entries only need a
/// TTL to bound memory. A TTL of zero disables the cache entirely.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    inner: Arc<tokio::sync::RwLock<CacheInner>>,
}

impl SnapshotCache {
    /// Creates a cache with the given TTL.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(tokio::sync::RwLock::new(CacheInner::new(ttl))),
        }
    }

    /// Creates a disabled cache.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Returns the cached snapshot for the date if present and fresh.
    pub async fn get(&self, date: NaiveDate) -> Option<RateSnapshot> {
        let store = self.inner.read().await;
        store.get(date)
    }

    /// Stores a snapshot for its trading date.
    ///
    /// No-op when the cache is disabled.
    pub async fn insert(&self, date: NaiveDate, snapshot: RateSnapshot) {
        let mut store = self.inner.write().await;
        if store.ttl == Duration::ZERO {
            return;
        }
        store.insert(date, snapshot);
    }

    /// Returns the snapshot for the date, fetching and caching it on a miss.
    ///
    /// # Errors
    ///
    /// Returns an error if the miss path fails to fetch.
    pub async fn get_or_fetch(
        &self,
        client: &FeedClient,
        date: NaiveDate,
    ) -> Result<RateSnapshot, FeedError> {
        if let Some(snapshot) = self.get(date).await {
            debug!(date = %date, "snapshot cache hit");
            return Ok(snapshot);
        }

        let snapshot = client.fetch_snapshot(date).await?;
        self.insert(date, snapshot.clone()).await;
        Ok(snapshot)
    }

    /// Removes expired entries.
    pub async fn clear_expired(&self) {
        let mut store = self.inner.write().await;
        store.clear_expired();
    }

    /// Returns the number of cached snapshots, including expired ones.
    pub async fn len(&self) -> usize {
        let store = self.inner.read().await;
        store.len()
    }

    /// Returns true if the cache holds no snapshots.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(date: NaiveDate) -> RateSnapshot {
        RateSnapshot::new(date, Vec::new())
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[tokio::test]
    async fn test_cache_basic_operations() {
        let cache = SnapshotCache::new(Duration::from_secs(60));

        assert!(cache.get(date(15)).await.is_none());

        cache.insert(date(15), snapshot(date(15))).await;
        let hit = cache.get(date(15)).await.unwrap();
        assert_eq!(hit.trading_date, date(15));

        assert!(cache.get(date(12)).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_expiration() {
        let cache = SnapshotCache::new(Duration::from_millis(50));

        cache.insert(date(15), snapshot(date(15))).await;
        assert!(cache.get(date(15)).await.is_some());

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(cache.get(date(15)).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_clear_expired() {
        let cache = SnapshotCache::new(Duration::from_millis(50));

        cache.insert(date(15), snapshot(date(15))).await;
        cache.insert(date(12), snapshot(date(12))).await;
        assert_eq!(cache.len().await, 2);

        tokio::time::sleep(Duration::from_millis(80)).await;
        cache.clear_expired().await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_disabled_cache_never_stores() {
        let cache = SnapshotCache::disabled();

        cache.insert(date(15), snapshot(date(15))).await;
        assert!(cache.get(date(15)).await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_or_fetch_serves_from_cache() {
        let cache = SnapshotCache::new(Duration::from_secs(60));
        cache.insert(date(15), snapshot(date(15))).await;

        // A hit never touches the network, so an unreachable client is fine.
        let client = FeedClient::with_defaults().unwrap();
        let hit = cache.get_or_fetch(&client, date(15)).await.unwrap();
        assert_eq!(hit.trading_date, date(15));
    }
}
