#![allow(dead_code)]

use infohub::{http, InfoHubConfig, InfoHubServer};

pub const WEATHER_KEY: &str = "weather-test-key";
pub const RATES_KEY: &str = "rates-test-key";

/// Config pointing both upstreams at `upstream_uri`, with credentials and no quote delay.
pub fn test_config(upstream_uri: &str) -> InfoHubConfig {
    let mut config = InfoHubConfig::default();
    config.apis.openweather_api_key = Some(WEATHER_KEY.to_string());
    config.apis.exchangerate_api_key = Some(RATES_KEY.to_string());
    config.apis.openweather_base_url = upstream_uri.to_string();
    config.apis.exchangerate_base_url = upstream_uri.to_string();
    config.apis.timeout_seconds = 5;
    config.quotes.delay_ms = 0;
    config
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(server: InfoHubServer) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http::router(server)).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn london_payload() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
        "main": { "temp": 15.4, "feels_like": 14.5, "temp_min": 13.9, "temp_max": 16.7, "pressure": 1012, "humidity": 72 },
        "visibility": 10000,
        "wind": { "speed": 3.6, "deg": 250 },
        "dt": 1700000000,
        "name": "London",
        "cod": 200
    })
}

pub fn rates_payload() -> serde_json::Value {
    serde_json::json!({
        "result": "success",
        "base_code": "INR",
        "time_last_update_utc": "Fri, 01 Mar 2024 00:00:01 +0000",
        "conversion_rates": {
            "INR": 1,
            "USD": 0.012023,
            "EUR": 0.011046,
            "GBP": 0.009412,
            "JPY": 1.8123
        }
    })
}
