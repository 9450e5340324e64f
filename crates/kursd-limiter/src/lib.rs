//! Per-client request rate limiting for the kursd exchange-rate service.
//!
//! Two strategies, both keyed by an opaque client string:
//!
//! - [`SlidingWindowLimiter`] - per-request timestamps, capacity returns
//!   continuously as old requests age out
//! - [`FixedWindowLimiter`] - a counter with a stamped expiry, the whole
//!   budget returns at once when the window rolls over

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kursd/kursd/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod fixed;
mod sliding;

pub use fixed::FixedWindowLimiter;
pub use sliding::SlidingWindowLimiter;
