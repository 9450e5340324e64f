//! Daily feed URL construction.

use chrono::NaiveDate;
use kursd_types::format_feed_date;

/// Default base URL for the daily XML rate feed.
pub const FEED_URL: &str = "https://www.cbr.ru/scripts/XML_daily.asp";

/// Builds the URL for a specific trading date.
///
/// URL format: `{feed_url}?date_req={DD/MM/YYYY}`
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kursd_feed::url::{FEED_URL, daily_url};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let url = daily_url(FEED_URL, date);
/// assert_eq!(url, "https://www.cbr.ru/scripts/XML_daily.asp?date_req=15/01/2024");
/// ```
#[must_use]
pub fn daily_url(feed_url: &str, date: NaiveDate) -> String {
    format!("{}?date_req={}", feed_url, format_feed_date(date))
}
