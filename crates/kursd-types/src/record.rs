//! Rate records and daily snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single currency entry from the daily feed.
///
/// The feed quotes `value` in local currency per `nominal` units of the
/// foreign currency, so JPY may be quoted per 100 units while USD is per 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// 3-letter currency code, uppercase (e.g. `USD`).
    pub code: String,
    /// Display name in the feed's source language.
    pub name: String,
    /// Unit count the value is denominated per.
    pub nominal: u32,
    /// Local-currency value per `nominal` units.
    pub value: f64,
}

impl RateRecord {
    /// Creates a new rate record.
    #[must_use]
    pub const fn new(code: String, name: String, nominal: u32, value: f64) -> Self {
        Self {
            code,
            name,
            nominal,
            value,
        }
    }

    /// Returns the cost of exactly one unit of the currency.
    #[must_use]
    pub fn unit_value(&self) -> f64 {
        self.value / f64::from(self.nominal)
    }

    /// Returns true if the record satisfies the feed invariants:
    /// `nominal >= 1` and `value > 0`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.nominal >= 1 && self.value > 0.0
    }
}

/// All rate records published for one trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// The trading day the snapshot was published for.
    pub trading_date: NaiveDate,
    /// Parsed records in feed order.
    pub records: Vec<RateRecord>,
}

impl RateSnapshot {
    /// Creates a snapshot from parsed records.
    #[must_use]
    pub const fn new(trading_date: NaiveDate, records: Vec<RateRecord>) -> Self {
        Self {
            trading_date,
            records,
        }
    }

    /// Finds the first record with the given code.
    ///
    /// A malformed feed may repeat a code; the first occurrence wins and
    /// later duplicates are never consulted.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&RateRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    /// Returns the per-unit value for the given code, if present.
    #[must_use]
    pub fn unit_value(&self, code: &str) -> Option<f64> {
        self.find(code).map(RateRecord::unit_value)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the snapshot holds no records.
    ///
    /// An empty snapshot is valid: a fully malformed feed day parses to
    /// zero records and callers decide how to present that.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
