//! Series fetcher: candle history for one market as an ordered bar sequence.

use upbit_api::{Client, Interval};

use crate::error::FetchError;
use crate::model::Bar;

/// Fetches the `count` most-recent bars for a market, oldest first.
///
/// Provider errors come back as a [`FetchError`] tagged with the market
/// rather than propagating; callers treat fetch failure as a per-market,
/// non-fatal condition. An empty result is returned as-is and handled the
/// same way as an error by the analyzer.
pub async fn fetch_series(
    client: &Client,
    symbol: &str,
    interval: Interval,
    count: u32,
) -> Result<Vec<Bar>, FetchError> {
    let candles = client
        .get_candles(symbol, interval, count)
        .await
        .map_err(|source| FetchError {
            symbol: symbol.to_string(),
            source,
        })?;
    Ok(candles.into_iter().map(Bar::from).collect())
}
