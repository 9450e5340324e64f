//! Convert command implementation.

use anyhow::{Context, Result};
use kursd_lib::prelude::*;

use crate::display;

/// Convert an amount between two currencies at the resolved trading day's
/// rates.
pub(crate) async fn convert_amount(
    amount: f64,
    from: &str,
    to: &str,
    date_str: Option<&str>,
) -> Result<()> {
    let requested = match date_str {
        Some(s) => display::parse_cli_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let working = HolidayCalendar::global().last_working_day(requested);

    let client = FeedClient::with_defaults()?;
    let snapshot = client.fetch_snapshot(working).await?;

    let from = from.to_uppercase();
    let to = to.to_uppercase();
    let converted = convert(amount, &from, &to, &snapshot)
        .with_context(|| format!("No rate for {from} or {to} on {working}"))?;

    println!(
        "{amount} {from} = {converted:.4} {to} ({})",
        format_feed_date(working)
    );

    Ok(())
}
