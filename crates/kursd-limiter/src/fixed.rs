//! Fixed window rate limiting.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::warn;

/// Default request budget per window.
const DEFAULT_LIMIT: u32 = 3;

/// Default window length.
const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Per-client window state.
#[derive(Debug, Clone, Copy)]
struct WindowState {
    count: u32,
    reset_at: Instant,
}

/// Fixed window rate limiter keyed by client.
///
/// The first request of a window stamps its expiry; requests inside the
/// window count against the budget, and the first request after the
/// expiry opens a fresh window. Unlike the sliding variant, the whole
/// budget returns at once when the window rolls over.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    entries: Mutex<HashMap<String, WindowState>>,
    limit: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    /// Creates a limiter allowing `limit` requests per `window`.
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            limit,
            window,
        }
    }

    /// Creates a limiter with the default budget of 3 requests per minute.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_WINDOW)
    }

    /// Records a request for `key` and returns whether it is allowed.
    ///
    /// Rejected requests leave the window untouched; its expiry is
    /// stamped once, by the request that opened it.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entries = self.lock_entries();

        let state = entries.entry(key.to_string()).or_insert(WindowState {
            count: 0,
            reset_at: now + self.window,
        });

        if now > state.reset_at {
            *state = WindowState {
                count: 0,
                reset_at: now + self.window,
            };
        }

        if state.count >= self.limit {
            return false;
        }
        state.count += 1;
        true
    }

    /// Forgets the current window for `key`.
    pub fn reset(&self, key: &str) {
        let mut entries = self.lock_entries();
        entries.remove(key);
    }

    /// Returns the configured request budget.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the configured window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Locks the entry map, recovering the guard if a holder panicked.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, WindowState>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("fixed limiter mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for FixedWindowLimiter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
