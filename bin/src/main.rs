//! kursd CLI - Bank of Russia exchange-rate server and toolbox.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "kursd")]
#[command(about = "Bank of Russia exchange-rate server and toolbox", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen address (overrides KURSD_LISTEN)
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Show daily rates with their change since the previous trading day
    Rates {
        /// Date (YYYY-MM-DD). Defaults to today; weekends and holidays
        /// resolve to the last working day.
        #[arg(short, long)]
        date: Option<String>,

        /// Currency the rates are quoted in
        #[arg(short, long, default_value = "RUB")]
        base: String,

        /// Only show these currency codes
        #[arg(short, long, value_delimiter = ',')]
        codes: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Convert an amount between two currencies
    Convert {
        /// Amount in the source currency
        amount: f64,

        /// Source currency code (e.g. USD, RUB)
        from: String,

        /// Target currency code
        to: String,

        /// Date (YYYY-MM-DD). Defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve { listen } => commands::serve::serve(listen.as_deref()).await,
        Commands::Rates {
            date,
            base,
            codes,
            format,
        } => commands::rates::rates(date.as_deref(), &base, &codes, format).await,
        Commands::Convert {
            amount,
            from,
            to,
            date,
        } => commands::convert::convert_amount(amount, &from, &to, date.as_deref()).await,
    }
}
