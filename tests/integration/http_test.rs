//! HTTP client tests against a local canned server

use crate::common::{http_response, serve_once};
use ratio_signal::config::{Credentials, NotifyConfig};
use ratio_signal::feed::{FeedError, GoldPriceClient, GoldPriceConfig, PriceSource};
use ratio_signal::notify::{Notifier, TelegramNotifier};
use rust_decimal_macros::dec;
use std::time::Duration;

fn price_client(addr: std::net::SocketAddr) -> GoldPriceClient {
    GoldPriceClient::new(GoldPriceConfig {
        url: format!("http://{}/dbXRates/USD", addr),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn notifier(addr: std::net::SocketAddr) -> TelegramNotifier {
    let config = NotifyConfig {
        api_base: format!("http://{}", addr),
        timeout_secs: 5,
        ..NotifyConfig::default()
    };
    let credentials = Credentials {
        bot_token: "123:abc".to_string(),
        chat_id: "-1001".to_string(),
        run_url: None,
    };
    TelegramNotifier::new(&config, credentials).unwrap()
}

#[tokio::test]
async fn test_feed_parses_success_response() {
    let body = r#"{"ts":1750000000000,"items":[{"curr":"USD","xauPrice":3400,"xagPrice":38}]}"#;
    let (addr, server) = serve_once(http_response("200 OK", body)).await;

    let prices = price_client(addr).fetch_prices().await.unwrap();
    assert_eq!(prices.xau(), dec!(3400));
    assert_eq!(prices.xag(), dec!(38));

    let request = server.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /dbxrates/usd http/1.1"));
    assert!(request.contains("accept: application/json"));
}

#[tokio::test]
async fn test_feed_server_error_is_status_failure() {
    let (addr, server) = serve_once(http_response("500 Internal Server Error", "{}")).await;

    let err = price_client(addr).fetch_prices().await.unwrap_err();
    assert!(matches!(err, FeedError::Status(500)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_feed_success_without_prices_is_data_failure() {
    let body = r#"{"items":[{"xagPrice":38}]}"#;
    let (addr, _server) = serve_once(http_response("200 OK", body)).await;

    let err = price_client(addr).fetch_prices().await.unwrap_err();
    assert!(matches!(err, FeedError::MissingPrice("xauPrice")));
}

#[tokio::test]
async fn test_notifier_posts_chat_and_text() {
    let (addr, server) = serve_once(http_response("200 OK", r#"{"ok":true}"#)).await;

    notifier(addr).send("Signal: None").await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /bot123:abc/sendMessage HTTP/1.1"));
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "chat_id": "-1001", "text": "Signal: None" })
    );
}

#[tokio::test]
async fn test_notifier_ignores_rejected_delivery() {
    let (addr, server) = serve_once(http_response(
        "400 Bad Request",
        r#"{"ok":false,"description":"Bad Request: chat not found"}"#,
    ))
    .await;

    assert!(notifier(addr).send("hello").await.is_ok());
    server.await.unwrap();
}
