use infohub::adapters::{FixedPicker, QuoteAdapter, QuoteCatalog};
use infohub::{InfoHubConfig, InfoHubServer};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

async fn get(url: &str) -> (u16, Value, Option<String>) {
    let res = reqwest::get(url).await.unwrap();
    let status = res.status().as_u16();
    let cors = res
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = res.json::<Value>().await.unwrap();
    (status, body, cors)
}

async fn app_with_upstream(mock_server: &MockServer) -> String {
    let server = InfoHubServer::new(common::test_config(&mock_server.uri())).unwrap();
    common::spawn_app(server).await
}

#[tokio::test]
async fn weather_endpoint_rounds_and_reshapes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::london_payload()))
        .mount(&mock_server)
        .await;
    let app = app_with_upstream(&mock_server).await;

    let (status, body, cors) = get(&format!("{app}/api/weather?city=London")).await;
    assert_eq!(status, 200);
    assert_eq!(body["city"], "London");
    assert_eq!(body["temperature"], 15);
    assert_eq!(body["feelsLike"], 15);
    assert_eq!(body["windSpeed"], 4);
    assert_eq!(body["visibility"], 10);
    assert!(body["lastUpdated"].is_string());
    assert_eq!(cors.as_deref(), Some("*"));
}

#[tokio::test]
async fn weather_unknown_city_is_404() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;
    let app = app_with_upstream(&mock_server).await;

    let (status, body, _) = get(&format!("{app}/api/weather?city=Nowhereville")).await;
    assert_eq!(status, 404);
    assert!(body["error"].as_str().unwrap().starts_with("City not found"));
}

#[tokio::test]
async fn weather_upstream_failure_is_generic_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let app = app_with_upstream(&mock_server).await;

    let (status, body, _) = get(&format!("{app}/api/weather")).await;
    assert_eq!(status, 500);
    assert_eq!(
        body["error"],
        "Could not fetch weather data. Please try again later."
    );
}

#[tokio::test]
async fn missing_credentials_are_400_regardless_of_query() {
    let app = common::spawn_app(InfoHubServer::new(InfoHubConfig::default()).unwrap()).await;

    for query in ["", "?city=London", "?city="] {
        let (status, body, _) = get(&format!("{app}/api/weather{query}")).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "OpenWeather API key not configured");
    }
    for query in ["", "?amount=100", "?amount=-5", "?amount=abc"] {
        let (status, body, _) = get(&format!("{app}/api/currency{query}")).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "ExchangeRate API key not configured");
    }
}

#[tokio::test]
async fn currency_endpoint_converts_amount() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}/latest/INR", common::RATES_KEY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::rates_payload()))
        .mount(&mock_server)
        .await;
    let app = app_with_upstream(&mock_server).await;

    let (status, body, _) = get(&format!("{app}/api/currency?amount=100")).await;
    assert_eq!(status, 200);
    assert_eq!(body["amount"], 100.0);
    assert_eq!(body["baseCurrency"], "INR");
    assert_eq!(body["rates"]["USD"]["amount"], "1.20");
    assert_eq!(body["rates"]["EUR"]["rate"], "0.011046");
    assert_eq!(body["rates"]["GBP"]["amount"], "0.94");
    assert!(body["rates"].get("JPY").is_none());
}

#[tokio::test]
async fn currency_rejects_non_positive_and_non_numeric_amounts() {
    let mock_server = MockServer::start().await;
    let app = app_with_upstream(&mock_server).await;

    for amount in ["0", "-1", "-0.01", "abc"] {
        let (status, body, _) = get(&format!("{app}/api/currency?amount={amount}")).await;
        assert_eq!(status, 400, "amount={amount}");
        assert_eq!(body["error"], "Amount must be greater than 0");
    }
}

#[tokio::test]
async fn currency_upstream_failure_is_generic_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "result": "error",
            "error-type": "invalid-key"
        })))
        .mount(&mock_server)
        .await;
    let app = app_with_upstream(&mock_server).await;

    let (status, body, _) = get(&format!("{app}/api/currency?amount=5")).await;
    assert_eq!(status, 500);
    assert_eq!(
        body["error"],
        "Could not fetch currency data. Please try again later."
    );
}

#[tokio::test]
async fn quote_endpoint_returns_fixed_index() {
    let quotes = QuoteAdapter::new(
        QuoteCatalog::builtin(),
        Arc::new(FixedPicker(4)),
        Duration::ZERO,
    );
    let server = InfoHubServer::new(InfoHubConfig::default())
        .unwrap()
        .with_quote_adapter(quotes);
    let app = common::spawn_app(server).await;

    let (status, body, _) = get(&format!("{app}/api/quote")).await;
    assert_eq!(status, 200);
    assert_eq!(body["id"], 4);
    assert_eq!(body["totalQuotes"], 10);
    assert_eq!(body["author"], "Aristotle");
    assert!(body["fetchedAt"].is_string());
}

#[tokio::test]
async fn quote_endpoint_covers_every_index() {
    let mut config = InfoHubConfig::default();
    config.quotes.delay_ms = 0;
    let app = common::spawn_app(InfoHubServer::new(config).unwrap()).await;

    let mut seen: HashMap<u64, usize> = HashMap::new();
    for _ in 0..300 {
        let (status, body, _) = get(&format!("{app}/api/quote")).await;
        assert_eq!(status, 200);
        let id = body["id"].as_u64().unwrap();
        assert!(id < body["totalQuotes"].as_u64().unwrap());
        *seen.entry(id).or_default() += 1;
    }
    assert_eq!(seen.len(), 10);
}

#[tokio::test]
async fn quote_internal_fault_is_500() {
    let quotes = QuoteAdapter::new(
        QuoteCatalog::builtin(),
        Arc::new(FixedPicker(99)),
        Duration::ZERO,
    );
    let server = InfoHubServer::new(InfoHubConfig::default())
        .unwrap()
        .with_quote_adapter(quotes);
    let app = common::spawn_app(server).await;

    let (status, body, _) = get(&format!("{app}/api/quote")).await;
    assert_eq!(status, 500);
    assert_eq!(
        body["error"],
        "Could not fetch quote data. Please try again later."
    );
}

#[tokio::test]
async fn health_reports_configured_port() {
    let mut config = InfoHubConfig::default();
    config.server.port = 4321;
    let app = common::spawn_app(InfoHubServer::new(config).unwrap()).await;

    let (status, body, _) = get(&format!("{app}/api/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "Server is running");
    assert_eq!(body["port"], 4321);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = common::spawn_app(InfoHubServer::new(InfoHubConfig::default()).unwrap()).await;

    let (status, body, cors) = get(&format!("{app}/api/nope")).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Route not found");
    assert_eq!(cors.as_deref(), Some("*"));
}
