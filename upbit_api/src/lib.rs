//! Client for the Upbit public quotation API: market listing and candle
//! history. Only the unauthenticated endpoints needed for market screening
//! are covered; order placement and account endpoints are out of scope.

mod client;
mod errors;
pub mod types;
mod user_agent;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::types::{DayCandle, Interval, MarketInfo};
