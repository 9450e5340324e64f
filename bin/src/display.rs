//! Display utilities and output formatting for the kursd CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use kursd_lib::prelude::*;

/// Output format for rate listings.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
}

/// Parse a YYYY-MM-DD command line date.
pub(crate) fn parse_cli_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
}

/// Print quotes as an aligned table, one row per feed record.
pub(crate) fn print_rates_table(rows: &[(u32, RateQuote)], working_date: &str, base: &str) {
    println!("Rates for {working_date} (base {base})");
    println!(
        "{:<6} {:<32} {:>7} {:>12} {:>9}",
        "CODE", "NAME", "NOMINAL", "RATE", "CHANGE"
    );
    println!("{}", "-".repeat(70));

    for (nominal, quote) in rows {
        println!(
            "{:<6} {:<32} {:>7} {:>12.4} {:>+8.2}%",
            quote.code, quote.name, nominal, quote.rate, quote.change_24h
        );
    }
}

/// Print quotes as a JSON array in the API wire shape.
pub(crate) fn print_rates_json(rows: &[(u32, RateQuote)]) -> Result<()> {
    let quotes: Vec<&RateQuote> = rows.iter().map(|(_, quote)| quote).collect();
    println!("{}", serde_json::to_string_pretty(&quotes)?);
    Ok(())
}
