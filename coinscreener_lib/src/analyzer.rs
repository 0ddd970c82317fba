//! Per-market reduction and the universe scan.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::sleep;
use upbit_api::{Client, Interval};

use crate::error::ScreenerError;
use crate::fetch::fetch_series;
use crate::model::{AnalysisRecord, Bar};
use crate::universe::{list_symbols, QUOTE_CURRENCY};

/// Bounded fan-out for the universe scan; keeps the request rate within
/// the exchange's per-IP quota.
const CONCURRENCY: usize = 5;

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Reduces one market's bar sequence into its statistics record.
///
/// Returns `None` for an empty sequence, or when the average close is not
/// a positive finite number (which would make the jump ratio undefined).
pub fn summarize(symbol: &str, bars: &[Bar]) -> Option<AnalysisRecord> {
    if bars.is_empty() {
        return None;
    }

    let mut lowest = f64::INFINITY;
    let mut highest = f64::NEG_INFINITY;
    let mut close_sum = 0.0;
    let mut volume_sum = 0.0;
    for bar in bars {
        lowest = lowest.min(bar.close);
        highest = highest.max(bar.close);
        close_sum += bar.close;
        volume_sum += bar.volume;
    }

    let n = bars.len() as f64;
    let average_close = close_sum / n;
    if !average_close.is_finite() || average_close <= 0.0 {
        return None;
    }
    let average_volume = volume_sum / n;

    Some(AnalysisRecord {
        symbol: symbol.to_string(),
        lowest_close: lowest,
        average_close,
        highest_close: highest,
        average_volume,
        average_daily_trade_amount: average_volume * average_close,
        jump_ratio: round4(highest / average_close),
    })
}

/// Analyzes one market: fetch its bar history, then reduce.
///
/// Every per-market failure mode -- transport error, empty history,
/// degenerate average close -- is absorbed here and logged with the
/// market code, so the universe scan never aborts on a single market.
pub async fn analyze_symbol(
    client: &Client,
    symbol: &str,
    interval: Interval,
    lookback: u32,
) -> Option<AnalysisRecord> {
    let bars = match fetch_series(client, symbol, interval, lookback).await {
        Ok(bars) => bars,
        Err(e) => {
            tracing::warn!("{}: excluded from analysis: {}", symbol, e);
            return None;
        }
    };

    if bars.is_empty() {
        tracing::warn!("{}: empty candle history, excluded from analysis", symbol);
        return None;
    }

    let record = summarize(symbol, &bars);
    if record.is_none() {
        tracing::warn!("{}: average close is zero or invalid, excluded from analysis", symbol);
    }
    record
}

/// Analyzes every market in the KRW universe and collects the surviving
/// records.
///
/// Market enumeration failure is fatal; everything after that is
/// per-market and skipped on error. Fetches run through a bounded
/// `Semaphore` + `JoinSet` fan-out with a small jittered delay per task;
/// records are collected in task-completion order, which is not
/// significant downstream. Zero survivors is a valid empty result.
pub async fn analyze_universe(
    client: &Client,
    interval: Interval,
    lookback: u32,
) -> Result<Vec<AnalysisRecord>, ScreenerError> {
    let symbols = list_symbols(client, QUOTE_CURRENCY).await?;
    tracing::info!("analyzing {} {} markets", symbols.len(), QUOTE_CURRENCY);

    let semaphore = Arc::new(Semaphore::new(CONCURRENCY));
    let mut join_set = JoinSet::new();

    for symbol in symbols {
        let sem = Arc::clone(&semaphore);
        let client = client.clone();
        join_set.spawn(async move {
            let _permit = sem.acquire().await.expect("semaphore closed");
            let delay_ms = rand::thread_rng().gen_range(50..150);
            sleep(Duration::from_millis(delay_ms)).await;
            analyze_symbol(&client, &symbol, interval, lookback).await
        });
    }

    let mut records = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        if let Ok(Some(record)) = joined {
            records.push(record);
        }
    }
    Ok(records)
}
