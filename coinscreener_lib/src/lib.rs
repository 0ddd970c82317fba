//! Screening layer for Upbit KRW markets: universe listing, candle series
//! fetching, per-market descriptive statistics, and jump-ratio rankings.
//!
//! Wraps the `upbit_api` crate; all results live in memory for the
//! duration of one analysis run.

pub mod analyzer;
pub mod error;
pub mod fetch;
pub mod model;
pub mod ranker;
pub mod universe;

pub use upbit_api;
pub use upbit_api::{Client, Interval};

pub use analyzer::{analyze_symbol, analyze_universe, summarize};
pub use error::{FetchError, ScreenerError};
pub use fetch::fetch_series;
pub use model::{AnalysisRecord, Bar};
pub use ranker::{top_ascending, top_descending};
pub use universe::{list_markets, list_symbols, EXCLUDED_MARKETS, QUOTE_CURRENCY};
