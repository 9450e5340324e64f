//! Joined day-over-day rate quotes.

use serde::{Deserialize, Serialize};

use crate::{RateSnapshot, change_percent};

/// One row of the day-over-day join, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    /// 3-letter currency code.
    pub code: String,
    /// Display name from today's snapshot.
    pub name: String,
    /// Today's per-unit value.
    pub rate: f64,
    /// Percentage change against the previous trading day's per-unit value.
    pub change_24h: f64,
}

/// Joins today's snapshot against the previous trading day's.
///
/// Every record of `today` produces a quote, in feed order. The baseline is
/// the first record in `previous` with the same code; a record with no match
/// falls back to its own unit value, so its change reads `0` and the entry
/// is still emitted.
#[must_use]
pub fn diff_snapshots(today: &RateSnapshot, previous: &RateSnapshot) -> Vec<RateQuote> {
    today
        .records
        .iter()
        .map(|record| {
            let rate = record.unit_value();
            let previous_rate = previous.unit_value(&record.code).unwrap_or(rate);
            RateQuote {
                code: record.code.clone(),
                name: record.name.clone(),
                rate,
                change_24h: change_percent(rate, previous_rate),
            }
        })
        .collect()
}
