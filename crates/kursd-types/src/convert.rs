//! Currency conversion over a snapshot's rates.

use crate::RateSnapshot;

/// Currency code the feed denominates values in.
pub const BASE_CURRENCY: &str = "RUB";

/// Converts `amount` between two currencies at the snapshot's rates.
///
/// Codes are matched after uppercasing; [`BASE_CURRENCY`] always has a unit
/// value of `1.0` even though the feed never lists it. Returns `None` when
/// either code is absent from the snapshot.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kursd_types::{RateRecord, RateSnapshot, convert};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let snapshot = RateSnapshot::new(
///     date,
///     vec![RateRecord::new("USD".into(), "Доллар США".into(), 1, 90.0)],
/// );
///
/// assert_eq!(convert(100.0, "usd", "rub", &snapshot), Some(9000.0));
/// assert_eq!(convert(100.0, "GBP", "RUB", &snapshot), None);
/// ```
#[must_use]
pub fn convert(amount: f64, from: &str, to: &str, snapshot: &RateSnapshot) -> Option<f64> {
    let from = from.to_uppercase();
    let to = to.to_uppercase();
    if from == to {
        return Some(amount);
    }

    let from_unit = unit_value(&from, snapshot)?;
    let to_unit = unit_value(&to, snapshot)?;
    Some(amount * from_unit / to_unit)
}

fn unit_value(code: &str, snapshot: &RateSnapshot) -> Option<f64> {
    if code == BASE_CURRENCY {
        Some(1.0)
    } else {
        snapshot.unit_value(code)
    }
}
