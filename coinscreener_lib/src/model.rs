//! Core data model: OHLCV bars and per-market statistics records.

use chrono::NaiveDateTime;
use serde::Serialize;
use upbit_api::DayCandle;

/// One OHLCV observation for a fixed time period.
///
/// Sequences of bars are ordered oldest first and immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub time: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl From<DayCandle> for Bar {
    fn from(c: DayCandle) -> Self {
        Bar {
            time: c.candle_date_time_utc,
            open: c.opening_price,
            high: c.high_price,
            low: c.low_price,
            close: c.trade_price,
            volume: c.candle_acc_trade_volume,
        }
    }
}

/// Descriptive statistics for one market over a lookback window.
///
/// Only produced for a non-empty bar sequence with a positive average
/// close; markets violating that are dropped rather than carried with
/// sentinel values. Never persisted or mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    /// Market code, e.g. `KRW-BTC`.
    pub symbol: String,
    pub lowest_close: f64,
    pub average_close: f64,
    pub highest_close: f64,
    pub average_volume: f64,
    /// `average_volume * average_close`.
    pub average_daily_trade_amount: f64,
    /// `highest_close / average_close`, rounded to 4 decimal places.
    pub jump_ratio: f64,
}
