//! Daily rate feed client for the kursd exchange-rate service.
//!
//! This crate provides the feed pipeline:
//!
//! - [`url::daily_url`] - Constructs daily feed URLs
//! - [`FeedClient`] - HTTP client with connection pooling
//! - [`decode_feed`] - Windows-1251 body decoding
//! - [`parse_snapshot`] - `<Valute>` XML parsing
//! - [`SnapshotCache`] - TTL cache keyed by trading date

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kursd/kursd/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod client;
mod decode;
mod parse;
pub mod url;

pub use cache::SnapshotCache;
pub use client::{ClientConfig, FeedClient, FeedError};
pub use decode::decode_feed;
pub use parse::parse_snapshot;
