//! Core types for the kursd exchange-rate service.
//!
//! This crate provides the fundamental data structures used throughout kursd:
//!
//! - [`RateRecord`] - A single currency entry from the daily feed
//! - [`RateSnapshot`] - All records published for one trading day
//! - [`RateQuote`] - One row of the day-over-day join
//! - [`change_percent`] - Percentage change with the zero-baseline rule
//! - [`convert`] - Amount conversion at a snapshot's rates
//! - [`format_feed_date`] / [`parse_feed_date`] - The feed's `DD/MM/YYYY` dates

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kursd/kursd/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod change;
mod convert;
mod feed_date;
mod quote;
mod record;

pub use change::change_percent;
pub use convert::{BASE_CURRENCY, convert};
pub use feed_date::{FEED_DATE_FORMAT, FeedDateError, format_feed_date, parse_feed_date};
pub use quote::{RateQuote, diff_snapshots};
pub use record::{RateRecord, RateSnapshot};
