//! Client library for the kursd exchange-rate service.
//!
//! This is a facade crate that re-exports functionality from the kursd
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use kursd_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let calendar = HolidayCalendar::global();
//!     let today = chrono::Utc::now().date_naive();
//!     let trading_day = calendar.last_working_day(today);
//!
//!     let client = FeedClient::with_defaults()?;
//!     let snapshot = client.fetch_snapshot(trading_day).await?;
//!     println!("{} rates for {}", snapshot.len(), snapshot.trading_date);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kursd/kursd/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use kursd_types::*;

// Re-export the holiday calendar
pub use kursd_calendar::{HolidayCalendar, is_weekend};

// Re-export feed functionality
#[cfg(feature = "feed")]
pub use kursd_feed::{
    ClientConfig, FeedClient, FeedError, SnapshotCache, decode_feed, parse_snapshot,
};

// Re-export rate limiting
#[cfg(feature = "limiter")]
pub use kursd_limiter::{FixedWindowLimiter, SlidingWindowLimiter};

/// Prelude module for convenient imports.
///
/// ```
/// use kursd_lib::prelude::*;
/// ```
pub mod prelude {
    pub use kursd_types::{
        BASE_CURRENCY, RateQuote, RateRecord, RateSnapshot, change_percent, convert,
        diff_snapshots, format_feed_date, parse_feed_date,
    };

    pub use kursd_calendar::HolidayCalendar;

    #[cfg(feature = "feed")]
    pub use kursd_feed::{ClientConfig, FeedClient, FeedError, SnapshotCache};

    #[cfg(feature = "limiter")]
    pub use kursd_limiter::{FixedWindowLimiter, SlidingWindowLimiter};
}
