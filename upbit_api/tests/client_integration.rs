use chrono::{Duration, NaiveDate};
use serde_json::json;
use upbit_api::{Client, Error, Interval};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn candle_json(market: &str, date: NaiveDate, close: f64, volume: f64) -> serde_json::Value {
    json!({
        "market": market,
        "candle_date_time_utc": format!("{}T00:00:00", date),
        "candle_date_time_kst": format!("{}T09:00:00", date),
        "opening_price": close,
        "high_price": close,
        "low_price": close,
        "trade_price": close,
        "timestamp": date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis(),
        "candle_acc_trade_price": close * volume,
        "candle_acc_trade_volume": volume,
        "prev_closing_price": close,
        "change_price": 0.0,
        "change_rate": 0.0
    })
}

/// Newest-first page of daily candles ending at `end`, as Upbit serves them.
fn candle_page(market: &str, end: NaiveDate, len: usize) -> Vec<serde_json::Value> {
    (0..len)
        .map(|i| candle_json(market, end - Duration::days(i as i64), 100.0 + i as f64, 10.0))
        .collect()
}

#[tokio::test]
async fn get_markets_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/market/all"))
        .and(query_param("isDetails", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"market": "KRW-BTC", "korean_name": "비트코인", "english_name": "Bitcoin"},
            {"market": "KRW-ETH", "korean_name": "이더리움", "english_name": "Ethereum"},
            {"market": "BTC-ETH", "korean_name": "이더리움", "english_name": "Ethereum"}
        ])))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let markets = client.get_markets().await.unwrap();
    assert_eq!(markets.len(), 3);
    assert_eq!(markets[0].market, "KRW-BTC");
    assert_eq!(markets[2].market, "BTC-ETH");
}

#[tokio::test]
async fn get_markets_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/market/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.get_markets().await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn get_markets_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/market/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.get_markets().await;
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[tokio::test]
async fn get_candles_returns_ascending() {
    let mock_server = MockServer::start().await;
    let end = NaiveDate::from_ymd_opt(2024, 12, 27).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/candles/days"))
        .and(query_param("market", "KRW-BTC"))
        .and(query_param("count", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candle_page("KRW-BTC", end, 3)))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let candles = client.get_candles("KRW-BTC", Interval::Day, 3).await.unwrap();

    assert_eq!(candles.len(), 3);
    // Server sends newest first; the client reorders oldest first.
    assert!(candles[0].candle_date_time_utc < candles[2].candle_date_time_utc);
    assert_eq!(candles[2].candle_date_time_utc.date(), end);
}

#[tokio::test]
async fn get_candles_paginates_past_page_limit() {
    let mock_server = MockServer::start().await;
    let end = NaiveDate::from_ymd_opt(2024, 12, 27).unwrap();

    // First page: 200 candles, newest first, no cursor.
    let first_page = candle_page("KRW-BTC", end, 200);
    let oldest_of_first = end - Duration::days(199);

    Mock::given(method("GET"))
        .and(path("/v1/candles/days"))
        .and(query_param("count", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&first_page))
        .mount(&mock_server)
        .await;

    // Second page: 50 candles before the cursor.
    let second_page = candle_page("KRW-BTC", oldest_of_first - Duration::days(1), 50);

    Mock::given(method("GET"))
        .and(path("/v1/candles/days"))
        .and(query_param("count", "50"))
        .and(query_param("to", format!("{}T00:00:00", oldest_of_first)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&second_page))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let candles = client
        .get_candles("KRW-BTC", Interval::Day, 250)
        .await
        .unwrap();

    assert_eq!(candles.len(), 250);
    assert_eq!(
        candles[0].candle_date_time_utc.date(),
        end - Duration::days(249)
    );
    assert_eq!(candles[249].candle_date_time_utc.date(), end);
}

#[tokio::test]
async fn get_candles_short_history_stops_early() {
    let mock_server = MockServer::start().await;
    let end = NaiveDate::from_ymd_opt(2024, 12, 27).unwrap();

    // Newly listed market: only 30 days of history for a 90-day request.
    Mock::given(method("GET"))
        .and(path("/v1/candles/days"))
        .and(query_param("count", "90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candle_page("KRW-NEW", end, 30)))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let candles = client.get_candles("KRW-NEW", Interval::Day, 90).await.unwrap();
    assert_eq!(candles.len(), 30);
}

#[tokio::test]
async fn get_candles_empty_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/candles/days"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let candles = client.get_candles("KRW-GST", Interval::Day, 90).await.unwrap();
    assert!(candles.is_empty());
}

#[tokio::test]
async fn get_candles_too_many_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/candles/days"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.get_candles("KRW-BTC", Interval::Day, 90).await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 429, .. })));
}
