//! `<Valute>` block parsing from the daily XML feed.

use std::sync::OnceLock;

use chrono::NaiveDate;
use kursd_types::{RateRecord, RateSnapshot};
use regex::Regex;
use tracing::debug;

/// Compiled patterns for the feed's XML dialect.
struct Patterns {
    valute: Regex,
    char_code: Regex,
    name: Regex,
    nominal: Regex,
    value: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        valute: Regex::new(r"(?s)<Valute[^>]*>(.*?)</Valute>").expect("Invalid Valute pattern"),
        char_code: Regex::new(r"<CharCode>([^<]+)</CharCode>").expect("Invalid CharCode pattern"),
        name: Regex::new(r"<Name>([^<]+)</Name>").expect("Invalid Name pattern"),
        nominal: Regex::new(r"<Nominal>([^<]+)</Nominal>").expect("Invalid Nominal pattern"),
        value: Regex::new(r"<Value>([^<]+)</Value>").expect("Invalid Value pattern"),
    })
}

/// Parses a decoded daily feed into a snapshot for the given trading date.
///
/// Malformed `<Valute>` blocks are skipped rather than failing the whole
/// document; surviving records keep their feed order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kursd_feed::parse_snapshot;
///
/// let xml = "<Valute><CharCode>USD</CharCode><Nominal>1</Nominal>\
///            <Name>Доллар США</Name><Value>90,50</Value></Valute>";
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let snapshot = parse_snapshot(xml, date);
/// assert_eq!(snapshot.records[0].code, "USD");
/// ```
#[must_use]
pub fn parse_snapshot(text: &str, trading_date: NaiveDate) -> RateSnapshot {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for captures in patterns().valute.captures_iter(text) {
        let Some(block) = captures.get(1) else {
            continue;
        };
        match parse_record(block.as_str()) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped malformed valute blocks");
    }

    RateSnapshot::new(trading_date, records)
}

/// Parses one `<Valute>` block into a rate record.
///
/// Returns `None` when a field is missing or fails to parse, or when the
/// parsed record violates the feed invariants.
fn parse_record(block: &str) -> Option<RateRecord> {
    let patterns = patterns();
    let code = field(&patterns.char_code, block)?;
    let name = field(&patterns.name, block)?;
    let nominal: u32 = field(&patterns.nominal, block)?.trim().parse().ok()?;
    let value: f64 = field(&patterns.value, block)?
        .trim()
        .replace(',', ".")
        .parse()
        .ok()?;

    let record = RateRecord::new(code.to_string(), name.to_string(), nominal, value);
    record.is_valid().then_some(record)
}

/// Extracts the first capture group of `re` within `text`.
fn field<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    Some(re.captures(text)?.get(1)?.as_str())
}
