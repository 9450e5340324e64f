//! Rates command implementation.
//!
//! Resolves the trading day, fetches the current and previous snapshots and
//! prints the joined day-over-day view.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use kursd_lib::prelude::*;

use crate::display::{self, Format};

/// Show daily rates with their change since the previous trading day.
pub(crate) async fn rates(
    date_str: Option<&str>,
    base: &str,
    codes: &[String],
    format: Format,
) -> Result<()> {
    let requested = match date_str {
        Some(s) => display::parse_cli_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    let calendar = HolidayCalendar::global();
    let working = calendar.last_working_day(requested);
    let previous = calendar.previous_working_day(working);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    spinner.set_message(format!("Fetching rates for {working}"));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let client = FeedClient::with_defaults()?;
    let (current, baseline) = futures::try_join!(
        client.fetch_snapshot(working),
        client.fetch_snapshot(previous),
    )?;
    spinner.finish_and_clear();

    let base = base.to_uppercase();
    let quotes = join_quotes(&current, &baseline, &base)?;
    let mut rows: Vec<(u32, RateQuote)> = current
        .records
        .iter()
        .map(|record| record.nominal)
        .zip(quotes)
        .collect();

    if !codes.is_empty() {
        let wanted: Vec<String> = codes.iter().map(|code| code.to_uppercase()).collect();
        rows.retain(|(_, quote)| wanted.contains(&quote.code));
    }

    match format {
        Format::Table => display::print_rates_table(&rows, &format_feed_date(working), &base),
        Format::Json => display::print_rates_json(&rows)?,
    }

    Ok(())
}

/// Joins the two snapshots, re-quoting against `base` when it is not the
/// feed's own denomination.
fn join_quotes(
    current: &RateSnapshot,
    previous: &RateSnapshot,
    base: &str,
) -> Result<Vec<RateQuote>> {
    if base == BASE_CURRENCY {
        return Ok(diff_snapshots(current, previous));
    }

    current
        .records
        .iter()
        .map(|record| {
            let rate = convert(1.0, &record.code, base, current)
                .with_context(|| format!("Unknown base currency: {base}"))?;
            let previous_rate = convert(1.0, &record.code, base, previous).unwrap_or(rate);
            Ok(RateQuote {
                code: record.code.clone(),
                name: record.name.clone(),
                rate,
                change_24h: change_percent(rate, previous_rate),
            })
        })
        .collect()
}
