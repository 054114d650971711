use crate::adapters::{ConversionResult, Quote, WeatherReading};
use crate::error::{InfoHubError, Result};
use crate::http::{ErrorResponse, HealthStatus};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// HTTP client for the InfoHub API, one GET per call.
#[derive(Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("InfoHub-Dashboard/0.1.0")
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReading> {
        self.get_json("/api/weather", &[("city", city.to_string())])
            .await
    }

    pub async fn fetch_conversion(&self, amount: f64) -> Result<ConversionResult> {
        self.get_json("/api/currency", &[("amount", amount.to_string())])
            .await
    }

    pub async fn fetch_quote(&self) -> Result<Quote> {
        self.get_json("/api/quote", &[]).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/api/health", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(InfoHubError::NetworkError)?;

        let status = res.status();
        if !status.is_success() {
            let message = res.json::<ErrorResponse>().await.ok().map(|body| body.error);
            return Err(InfoHubError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        res.json::<T>().await.map_err(InfoHubError::NetworkError)
    }
}

impl Default for DashboardClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
