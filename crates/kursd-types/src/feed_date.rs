//! Feed date formatting.
//!
//! The upstream feed addresses daily snapshots by `DD/MM/YYYY` dates, both
//! in the request query and in response metadata.

use chrono::NaiveDate;
use thiserror::Error;

/// Date format used by the upstream feed.
pub const FEED_DATE_FORMAT: &str = "%d/%m/%Y";

/// Error returned when parsing an invalid feed date string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid feed date '{0}', expected DD/MM/YYYY")]
pub struct FeedDateError(String);

/// Formats a date as the feed's zero-padded `DD/MM/YYYY`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kursd_types::format_feed_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(format_feed_date(date), "05/03/2024");
/// ```
#[must_use]
pub fn format_feed_date(date: NaiveDate) -> String {
    date.format(FEED_DATE_FORMAT).to_string()
}

/// Parses a `DD/MM/YYYY` feed date.
///
/// # Errors
///
/// Returns an error if the string is not a calendar date in feed format.
pub fn parse_feed_date(s: &str) -> Result<NaiveDate, FeedDateError> {
    NaiveDate::parse_from_str(s, FEED_DATE_FORMAT).map_err(|_| FeedDateError(s.to_string()))
}
