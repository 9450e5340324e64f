//! Sliding window rate limiting.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::warn;

/// Default request budget per window.
const DEFAULT_LIMIT: usize = 10;

/// Default window length.
const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Sliding window rate limiter keyed by client.
///
/// Each client keeps the timestamps of its allowed requests inside the
/// current window; a request is allowed while fewer than `limit` of them
/// remain. The window slides continuously, so a client that burst its
/// budget regains capacity one request at a time.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    entries: Mutex<HashMap<String, Vec<Instant>>>,
    limit: usize,
    window: Duration,
}

impl SlidingWindowLimiter {
    /// Creates a limiter allowing `limit` requests per `window`.
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            limit,
            window,
        }
    }

    /// Creates a limiter with the default budget of 10 requests per minute.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_WINDOW)
    }

    /// Records a request for `key` and returns whether it is allowed.
    ///
    /// Rejected requests are not recorded, so hammering a full window
    /// never pushes the client's recovery further out.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entries = self.lock_entries();
        let timestamps = entries.entry(key.to_string()).or_default();

        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() >= self.limit {
            return false;
        }
        timestamps.push(now);
        true
    }

    /// Forgets all recorded requests for `key`.
    pub fn reset(&self, key: &str) {
        let mut entries = self.lock_entries();
        entries.remove(key);
    }

    /// Returns the configured request budget.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the configured window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Locks the entry map, recovering the guard if a holder panicked.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, Vec<Instant>>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("sliding limiter mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for SlidingWindowLimiter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shifts every stored timestamp for `key` back by `by`.
    fn rewind(limiter: &SlidingWindowLimiter, key: &str, by: Duration) {
        let mut entries = limiter.lock_entries();
        if let Some(timestamps) = entries.get_mut(key) {
            for t in timestamps.iter_mut() {
                *t -= by;
            }
        }
    }

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = SlidingWindowLimiter::new(3, Duration::from_secs(60));

        assert!(limiter.allow("client"));
        assert!(limiter.allow("client"));
        assert!(limiter.allow("client"));
        assert!(!limiter.allow("client"));
    }

    #[test]
    fn test_window_slides() {
        let limiter = SlidingWindowLimiter::new(2, Duration::from_secs(60));

        assert!(limiter.allow("client"));
        assert!(limiter.allow("client"));
        assert!(!limiter.allow("client"));

        rewind(&limiter, "client", Duration::from_secs(61));

        assert!(limiter.allow("client"));
        assert!(limiter.allow("client"));
        assert!(!limiter.allow("client"));
    }

    #[test]
    fn test_capacity_returns_one_request_at_a_time() {
        let limiter = SlidingWindowLimiter::new(2, Duration::from_secs(60));

        assert!(limiter.allow("client"));
        assert!(limiter.allow("client"));

        // Age out only the first request.
        {
            let mut entries = limiter.lock_entries();
            let timestamps = entries.get_mut("client").unwrap();
            timestamps[0] -= Duration::from_secs(61);
        }

        assert!(limiter.allow("client"));
        assert!(!limiter.allow("client"));
    }

    #[test]
    fn test_rejections_are_not_recorded() {
        let limiter = SlidingWindowLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.allow("client"));
        assert!(!limiter.allow("client"));
        assert!(!limiter.allow("client"));

        // Only the single allowed request should be stored.
        let entries = limiter.lock_entries();
        assert_eq!(entries.get("client").unwrap().len(), 1);
    }

    #[test]
    fn test_keys_are_isolated() {
        let limiter = SlidingWindowLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.allow("a"));
        assert!(!limiter.allow("a"));
        assert!(limiter.allow("b"));
    }

    #[test]
    fn test_reset() {
        let limiter = SlidingWindowLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.allow("client"));
        assert!(!limiter.allow("client"));

        limiter.reset("client");
        assert!(limiter.allow("client"));
    }

    #[test]
    fn test_defaults() {
        let limiter = SlidingWindowLimiter::with_defaults();
        assert_eq!(limiter.limit(), 10);
        assert_eq!(limiter.window(), Duration::from_secs(60));
    }
}
