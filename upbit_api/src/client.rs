//! HTTP client for the Upbit public REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{DayCandle, Interval, MarketInfo},
    user_agent::get_user_agent,
    Error,
};

/// Request timeout for Upbit API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of candles Upbit returns per request.
const CANDLE_PAGE_LIMIT: u32 = 200;

/// HTTP client for the Upbit public REST API.
///
/// Covers the unauthenticated quotation endpoints: market listing and
/// candle history. Sends a rotated browser-like user agent with each
/// request.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.upbit.com`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production Upbit API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://api.upbit.com")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_api_url: base_url.to_string(),
        })
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, Error> {
        let mut url =
            Url::parse(format!("{}{}", self.base_api_url, path).as_str()).map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::Parse(format!("invalid URL: {}", e))
            })?;
        for (key, value) in params {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, params)?;
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .header("user-agent", get_user_agent())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })
    }

    /// Fetches every tradable market across all quote currencies.
    pub async fn get_markets(&self) -> Result<Vec<MarketInfo>, Error> {
        self.get::<Vec<MarketInfo>>(
            "/v1/market/all",
            &[("isDetails", "false".to_string())],
        )
        .await
    }

    /// Fetches the `count` most-recent candles for a market, oldest first.
    ///
    /// Upbit serves at most [`CANDLE_PAGE_LIMIT`] candles per request, so
    /// larger counts are paginated with the `to` cursor (exclusive, set to
    /// the oldest candle time of the previous page). Returns fewer candles
    /// than requested when the market's history runs out.
    pub async fn get_candles(
        &self,
        market: &str,
        interval: Interval,
        count: u32,
    ) -> Result<Vec<DayCandle>, Error> {
        let path = format!("/v1/candles/{}", interval.path());
        let mut collected: Vec<DayCandle> = Vec::new();
        let mut cursor: Option<String> = None;

        while (collected.len() as u32) < count {
            let page_size = (count - collected.len() as u32).min(CANDLE_PAGE_LIMIT);
            let mut params = vec![
                ("market", market.to_string()),
                ("count", page_size.to_string()),
            ];
            if let Some(to) = &cursor {
                params.push(("to", to.clone()));
            }

            let page: Vec<DayCandle> = self.get(&path, &params).await?;
            if page.is_empty() {
                break;
            }

            // Candles arrive newest first; the oldest one anchors the next page.
            if let Some(oldest) = page.last() {
                cursor = Some(
                    oldest
                        .candle_date_time_utc
                        .format("%Y-%m-%dT%H:%M:%S")
                        .to_string(),
                );
            }

            let page_len = page.len() as u32;
            collected.extend(page);
            if page_len < page_size {
                break;
            }
        }

        collected.sort_by(|a, b| a.candle_date_time_utc.cmp(&b.candle_date_time_utc));
        Ok(collected)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Upbit error bodies are often Korean text; cut on a char boundary.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_short() {
        assert_eq!(truncate_body("ok"), "ok");
    }

    #[test]
    fn truncate_body_long() {
        let body = "x".repeat(3000);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() < body.len());
    }

    #[test]
    fn truncate_body_multibyte_boundary() {
        // 3 bytes per char: the byte cutoff lands mid-character.
        let body = "가".repeat(1000);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        let kept = out.trim_end_matches("...[truncated]");
        assert!(kept.chars().all(|c| c == '가'));
        assert!(kept.len() <= 2000);
    }

    #[test]
    fn client_creation_with_defaults() {
        assert!(Client::new().is_ok());
    }
}
