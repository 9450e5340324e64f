//! Bank-holiday calendar for the kursd exchange-rate service.
//!
//! The upstream feed publishes rates only for working days, so queries for
//! weekends and holidays must be mapped back to the most recent trading
//! date. This crate embeds the recurring federal holiday table and provides
//! that resolution.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use kursd_calendar::HolidayCalendar;
//!
//! let calendar = HolidayCalendar::global();
//!
//! // Victory Day 2024 falls on a Thursday.
//! let date = NaiveDate::from_ymd_opt(2024, 5, 9).unwrap();
//! assert!(calendar.is_holiday(date));
//! assert_eq!(
//!     calendar.last_working_day(date),
//!     NaiveDate::from_ymd_opt(2024, 5, 8).unwrap()
//! );
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kursd/kursd/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};

/// The holiday table JSON embedded at compile time.
const HOLIDAYS_JSON: &str = include_str!("../data/holidays.json");

/// Global holiday calendar instance.
static CALENDAR: OnceLock<HolidayCalendar> = OnceLock::new();

/// Returns true if the date falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Calendar of annually recurring bank holidays.
///
/// Holidays are keyed by day and month (`DD.MM`), so a single table covers
/// every year.
#[derive(Debug)]
pub struct HolidayCalendar {
    holidays: HashSet<String>,
}

impl HolidayCalendar {
    /// Returns the global holiday calendar.
    ///
    /// The calendar is initialized lazily on first access from the embedded
    /// holiday table.
    #[must_use]
    pub fn global() -> &'static Self {
        CALENDAR.get_or_init(Self::load)
    }

    /// Loads the calendar from the embedded JSON data.
    fn load() -> Self {
        let holidays: Vec<String> =
            serde_json::from_str(HOLIDAYS_JSON).expect("Invalid holidays.json");
        Self::with_holidays(holidays)
    }

    /// Creates a calendar from an explicit `DD.MM` holiday table.
    #[must_use]
    pub fn with_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Returns true if the date is a bank holiday.
    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date.format("%d.%m").to_string())
    }

    /// Returns true if the date is a working day, neither weekend nor holiday.
    #[must_use]
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// Resolves the most recent working day at or before the given date.
    ///
    /// Returns the date itself when it already is a working day.
    #[must_use]
    pub fn last_working_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_working_day(current) {
            // pred_opt returns None only at the minimum representable date.
            match current.pred_opt() {
                Some(previous) => current = previous,
                None => return current,
            }
        }
        current
    }

    /// Resolves the working day strictly before the given date.
    #[must_use]
    pub fn previous_working_day(&self, date: NaiveDate) -> NaiveDate {
        match date.pred_opt() {
            Some(previous) => self.last_working_day(previous),
            None => date,
        }
    }

    /// Returns the number of entries in the holiday table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the holiday table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_loads() {
        let calendar = HolidayCalendar::global();
        assert!(!calendar.is_empty());
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date(2024, 1, 13)));
        assert!(is_weekend(date(2024, 1, 14)));
        assert!(!is_weekend(date(2024, 1, 15)));
    }

    #[test]
    fn test_holidays_recur_annually() {
        let calendar = HolidayCalendar::global();
        assert!(calendar.is_holiday(date(2024, 1, 1)));
        assert!(calendar.is_holiday(date(2025, 1, 1)));
        assert!(!calendar.is_holiday(date(2024, 1, 15)));
    }

    #[test]
    fn test_working_day_resolves_to_itself() {
        let calendar = HolidayCalendar::global();
        let friday = date(2024, 1, 12);
        assert_eq!(calendar.last_working_day(friday), friday);
    }

    #[test]
    fn test_saturday_resolves_to_friday() {
        let calendar = HolidayCalendar::global();
        assert_eq!(
            calendar.last_working_day(date(2024, 1, 13)),
            date(2024, 1, 12)
        );
    }

    #[test]
    fn test_new_year_run_crosses_year_boundary() {
        let calendar = HolidayCalendar::global();
        // Jan 1-8 are holidays and Dec 30-31 of 2023 fall on a weekend.
        assert_eq!(
            calendar.last_working_day(date(2024, 1, 8)),
            date(2023, 12, 29)
        );
    }

    #[test]
    fn test_midweek_holiday_resolves_to_previous_day() {
        let calendar = HolidayCalendar::global();
        assert_eq!(
            calendar.last_working_day(date(2024, 5, 9)),
            date(2024, 5, 8)
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let calendar = HolidayCalendar::global();
        let resolved = calendar.last_working_day(date(2024, 1, 7));
        assert_eq!(calendar.last_working_day(resolved), resolved);
    }

    #[test]
    fn test_previous_working_day_from_monday() {
        let calendar = HolidayCalendar::global();
        assert_eq!(
            calendar.previous_working_day(date(2024, 1, 15)),
            date(2024, 1, 12)
        );
    }

    #[test]
    fn test_previous_working_day_skips_holiday() {
        let calendar = HolidayCalendar::global();
        // Feb 23 2024 is a Friday holiday, so the previous working day seen
        // from the following Monday is the preceding Thursday.
        assert_eq!(
            calendar.previous_working_day(date(2024, 2, 26)),
            date(2024, 2, 22)
        );
    }

    #[test]
    fn test_custom_holiday_table() {
        let calendar = HolidayCalendar::with_holidays(vec!["15.07".to_string()]);
        assert!(calendar.is_holiday(date(2024, 7, 15)));
        assert!(!calendar.is_holiday(date(2024, 7, 16)));
        assert_eq!(calendar.len(), 1);
    }
}
