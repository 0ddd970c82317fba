//! Error types for the screener layer.

use thiserror::Error;

/// Fatal, run-level errors. Per-market failures are absorbed at the
/// analyzer boundary and never surface here.
#[derive(Error, Debug)]
pub enum ScreenerError {
    /// The market listing could not be fetched at all.
    #[error("market listing unavailable: {0}")]
    ProviderUnavailable(#[source] upbit_api::Error),
}

/// A per-market candle fetch failure, tagged with the market it concerns.
/// Non-fatal: callers skip the market and continue.
#[derive(Error, Debug)]
#[error("fetch failed for {symbol}: {source}")]
pub struct FetchError {
    pub symbol: String,
    #[source]
    pub source: upbit_api::Error,
}
