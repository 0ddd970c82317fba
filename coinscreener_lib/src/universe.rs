//! Ticker source: the set of tradable markets for a quote currency.

use upbit_api::{Client, MarketInfo};

use crate::error::ScreenerError;

/// Quote currency of the screened universe.
pub const QUOTE_CURRENCY: &str = "KRW";

/// Stablecoin pairs excluded from every universe. Their jump ratio is
/// pinned near 1.0 by the peg and only pollutes the ascending list.
pub const EXCLUDED_MARKETS: &[&str] = &["KRW-USDT", "KRW-USDC"];

/// Lists every tradable market quoted in `quote`, minus the stablecoin
/// exclusion set. A transport failure here is fatal for the run; there is
/// no partial-universe handling at this layer.
pub async fn list_markets(client: &Client, quote: &str) -> Result<Vec<MarketInfo>, ScreenerError> {
    let markets = client
        .get_markets()
        .await
        .map_err(ScreenerError::ProviderUnavailable)?;

    let prefix = format!("{}-", quote);
    Ok(markets
        .into_iter()
        .filter(|m| {
            m.market.starts_with(&prefix) && !EXCLUDED_MARKETS.contains(&m.market.as_str())
        })
        .collect())
}

/// Same universe as [`list_markets`], reduced to the market codes.
pub async fn list_symbols(client: &Client, quote: &str) -> Result<Vec<String>, ScreenerError> {
    Ok(list_markets(client, quote)
        .await?
        .into_iter()
        .map(|m| m.market)
        .collect())
}
