//! The `recommend` subcommand: scans the KRW universe and prints two
//! ranked recommendation lists.
//!
//! Uses the Semaphore + JoinSet + mpsc pattern for concurrent candle
//! fetching with a bounded request rate; per-market failures are skipped
//! and reported, never fatal.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use coinscreener_lib::{
    analyze_symbol, list_symbols, top_ascending, top_descending, AnalysisRecord, Client, Interval,
    QUOTE_CURRENCY,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tokio::time::sleep;

use crate::output::{print_json, print_records, OutputFormat};

/// Maximum concurrent candle fetches.
const CONCURRENCY: usize = 5;

/// Arguments for the `recommend` subcommand.
#[derive(Args)]
pub struct RecommendArgs {
    /// Lookback window in daily bars (1-365)
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u32).range(1..=365))]
    pub lookback: u32,

    /// Number of recommendations per list (1-50)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub top: u32,
}

/// Message sent from fetch tasks to the receiver.
struct ScanResult {
    symbol: String,
    record: Option<AnalysisRecord>,
}

pub async fn run(args: &RecommendArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    // Universe enumeration is the only fatal step.
    let symbols = list_symbols(client, QUOTE_CURRENCY).await?;
    if symbols.is_empty() {
        bail!("no tradable {} markets returned by the exchange", QUOTE_CURRENCY);
    }

    eprintln!(
        "Analyzing {} {} markets over the last {} days",
        symbols.len(),
        QUOTE_CURRENCY,
        args.lookback
    );

    let pb = ProgressBar::new(symbols.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} ({eta}) {msg}",
        )
        .unwrap(),
    );
    pb.set_message("fetching daily candles...");

    let semaphore = Arc::new(Semaphore::new(CONCURRENCY));
    let (tx, mut rx) = mpsc::channel::<ScanResult>(CONCURRENCY * 2);
    let mut join_set = JoinSet::new();

    for symbol in symbols {
        let sem = Arc::clone(&semaphore);
        let sender = tx.clone();
        let client = client.clone();
        let lookback = args.lookback;

        join_set.spawn(async move {
            let _permit = sem.acquire().await.expect("semaphore closed");
            // Jittered delay keeps the burst under the exchange rate limit
            let delay_ms = rand::thread_rng().gen_range(50..150);
            sleep(Duration::from_millis(delay_ms)).await;

            let record = analyze_symbol(&client, &symbol, Interval::Day, lookback).await;
            let _ = sender.send(ScanResult { symbol, record }).await;
        });
    }
    drop(tx);

    let mut records: Vec<AnalysisRecord> = Vec::new();
    let mut skipped = 0usize;

    while let Some(scan) = rx.recv().await {
        match scan.record {
            Some(record) => records.push(record),
            None => {
                pb.println(format!("  Warning: {} excluded from analysis", scan.symbol));
                skipped += 1;
            }
        }
        pb.set_message(format!("{} ok, {} skipped", records.len(), skipped));
        pb.inc(1);
    }
    pb.finish_with_message(format!(
        "scan done: {} analyzed, {} skipped",
        records.len(),
        skipped
    ));

    if records.is_empty() {
        bail!("no market produced analyzable data");
    }

    let top_n = args.top as usize;
    let low_jump = top_ascending(&records, top_n);
    let high_jump = top_descending(&records, top_n);

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "low_jump_ratio": low_jump,
            "high_jump_ratio": high_jump,
        })),
        _ => {
            println!("Recommendation 1: coins with room to rise (lowest jump ratio)");
            print_records(&low_jump, format)?;
            println!();
            println!("Recommendation 2: coins with the highest jump ratio");
            print_records(&high_jump, format)?;
        }
    }

    Ok(())
}
