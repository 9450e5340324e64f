//! HTTP API server for the kursd exchange-rate service.
//!
//! The crate wires the feed, calendar and limiter crates into an axum
//! application:
//!
//! - [`Config`] reads the runtime configuration from the environment
//! - [`build_state`] constructs the shared [`AppState`] behind every handler
//! - [`app_router`] assembles the `/api` routes with CORS and request tracing
//! - [`validate_contact`] and [`TelegramNotifier`] back the contact endpoint
//!
//! Handlers return [`ApiResult`], mapping every failure to a stable JSON
//! error body.
#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kursd/kursd/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod error;
mod state;
mod telegram;
mod validation;

pub use api::app_router;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::{AppState, build_state, init_tracing};
pub use telegram::TelegramNotifier;
pub use validation::{
    ContactForm, PROJECT_TYPES, ValidationError, project_type_label, validate_contact,
};
