//! The `markets` subcommand: lists the tradable universe for a quote
//! currency, minus the stablecoin exclusions.

use anyhow::Result;
use clap::Args;
use coinscreener_lib::{list_markets, Client, QUOTE_CURRENCY};

use crate::output::{print_markets, OutputFormat};

/// Arguments for the `markets` subcommand.
#[derive(Args)]
pub struct MarketsArgs {
    /// Quote currency to list markets for
    #[arg(long, default_value = QUOTE_CURRENCY)]
    pub quote: String,
}

pub async fn run(args: &MarketsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let markets = list_markets(client, &args.quote).await?;
    if markets.is_empty() {
        eprintln!("No tradable {} markets found", args.quote);
        return Ok(());
    }
    print_markets(&markets, format)?;
    Ok(())
}
