//! Payload types for the Upbit public REST API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One tradable market from `GET /v1/market/all`.
///
/// `market` is a "QUOTE-BASE" code, e.g. `KRW-BTC`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInfo {
    pub market: String,
    pub korean_name: String,
    pub english_name: String,
}

/// One candle from `GET /v1/candles/{days,weeks,months}`.
///
/// `trade_price` is the closing price of the period and
/// `candle_acc_trade_volume` the accumulated traded volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCandle {
    pub market: String,
    /// Period open time in UTC, e.g. `2024-12-27T00:00:00`.
    pub candle_date_time_utc: NaiveDateTime,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
    pub candle_acc_trade_price: f64,
    pub candle_acc_trade_volume: f64,
    pub timestamp: i64,
}

/// Candle aggregation period. Upbit exposes one endpoint per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Day,
    Week,
    Month,
}

impl Interval {
    /// Path segment under `/v1/candles/`.
    pub fn path(&self) -> &'static str {
        match self {
            Interval::Day => "days",
            Interval::Week => "weeks",
            Interval::Month => "months",
        }
    }
}
