use serde::{Deserialize, Serialize};

use crate::adapters::{CurrencyAdapter, QuoteAdapter, WeatherAdapter};
use crate::config::InfoHubConfig;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub path: String,
    pub description: String,
}

/// Owns one instance of each adapter. Adapters share nothing with each other.
pub struct InfoHubServer {
    config: InfoHubConfig,
    weather: WeatherAdapter,
    currency: CurrencyAdapter,
    quotes: QuoteAdapter,
}

impl InfoHubServer {
    pub fn new(config: InfoHubConfig) -> Result<Self> {
        let weather = WeatherAdapter::new(&config.apis, &config.weather);
        let currency = CurrencyAdapter::new(&config.apis);
        let quotes = QuoteAdapter::from_config(&config.quotes)?;
        Ok(Self {
            config,
            weather,
            currency,
            quotes,
        })
    }

    /// Replaces the quote adapter, e.g. with a fixed picker.
    pub fn with_quote_adapter(mut self, quotes: QuoteAdapter) -> Self {
        self.quotes = quotes;
        self
    }

    pub fn config(&self) -> &InfoHubConfig {
        &self.config
    }

    pub fn weather_adapter(&self) -> &WeatherAdapter {
        &self.weather
    }

    pub fn currency_adapter(&self) -> &CurrencyAdapter {
        &self.currency
    }

    pub fn quote_adapter(&self) -> &QuoteAdapter {
        &self.quotes
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        vec![
            Endpoint {
                path: "/api/weather".to_string(),
                description: format!(
                    "Current weather by city (default {})",
                    self.config.weather.default_city
                ),
            },
            Endpoint {
                path: "/api/currency".to_string(),
                description: "Convert an INR amount into USD, EUR and GBP".to_string(),
            },
            Endpoint {
                path: "/api/quote".to_string(),
                description: format!(
                    "Random quote from {} entries",
                    self.quotes.catalog().len()
                ),
            },
            Endpoint {
                path: "/api/health".to_string(),
                description: "Liveness check".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_four_endpoints() {
        let server = InfoHubServer::new(InfoHubConfig::default()).unwrap();
        let endpoints = server.endpoints();
        assert_eq!(endpoints.len(), 4);
        let paths: Vec<_> = endpoints.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            ["/api/weather", "/api/currency", "/api/quote", "/api/health"]
        );
        assert!(endpoints[0].description.contains("London"));
    }

    #[test]
    fn unreadable_quote_file_fails_construction() {
        let mut config = InfoHubConfig::default();
        config.quotes.file = Some("/nonexistent/quotes.toml".into());
        assert!(InfoHubServer::new(config).is_err());
    }
}
