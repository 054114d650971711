use crate::error::{InfoHubError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoHubConfig {
    pub server: ServerConfig,
    pub apis: ApiConfig,
    pub weather: WeatherConfig,
    pub quotes: QuoteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub openweather_api_key: Option<String>,
    pub exchangerate_api_key: Option<String>,
    pub openweather_base_url: String,
    pub exchangerate_base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub default_city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub delay_ms: u64,
    // TOML file holding `[[quotes]]` entries; the built-in list is used when unset
    pub file: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_EXCHANGERATE_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            log_level: "info".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            openweather_api_key: None,
            exchangerate_api_key: None,
            openweather_base_url: DEFAULT_OPENWEATHER_BASE_URL.to_string(),
            exchangerate_base_url: DEFAULT_EXCHANGERATE_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            default_city: "London".to_string(),
        }
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            delay_ms: 300,
            file: None,
            seed: None,
        }
    }
}

impl InfoHubConfig {
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| InfoHubError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: InfoHubConfig = toml::from_str(&content).map_err(|e| {
            InfoHubError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config.normalized())
    }

    /// Layers environment variables on top of `self`.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(port) = env_var("INFOHUB_PORT").or_else(|| env_var("PORT")) {
            self.server.port = port
                .parse()
                .map_err(|_| InfoHubError::config_error(format!("Invalid port: {}", port)))?;
        }

        if let Some(host) = env_var("INFOHUB_HOST") {
            self.server.host = host;
        }

        if let Some(log_level) = env_var("INFOHUB_LOG_LEVEL") {
            self.server.log_level = log_level;
        }

        if let Some(key) = env_var("OPENWEATHER_API_KEY") {
            self.apis.openweather_api_key = Some(key);
        }
        if let Some(key) = env_var("EXCHANGERATE_API_KEY") {
            self.apis.exchangerate_api_key = Some(key);
        }
        if let Some(url) = env_var("OPENWEATHER_BASE_URL") {
            self.apis.openweather_base_url = url;
        }
        if let Some(url) = env_var("EXCHANGERATE_BASE_URL") {
            self.apis.exchangerate_base_url = url;
        }
        if let Some(timeout) = env_var("INFOHUB_HTTP_TIMEOUT_SECS") {
            self.apis.timeout_seconds = timeout
                .parse()
                .map_err(|_| InfoHubError::config_error("Invalid INFOHUB_HTTP_TIMEOUT_SECS"))?;
        }

        if let Some(city) = env_var("INFOHUB_DEFAULT_CITY") {
            self.weather.default_city = city;
        }

        if let Some(delay) = env_var("INFOHUB_QUOTE_DELAY_MS") {
            self.quotes.delay_ms = delay
                .parse()
                .map_err(|_| InfoHubError::config_error("Invalid INFOHUB_QUOTE_DELAY_MS"))?;
        }
        if let Some(file) = env_var("INFOHUB_QUOTES_FILE") {
            self.quotes.file = Some(PathBuf::from(file));
        }
        if let Some(seed) = env_var("INFOHUB_QUOTE_SEED") {
            self.quotes.seed = Some(
                seed.parse()
                    .map_err(|_| InfoHubError::config_error("Invalid INFOHUB_QUOTE_SEED"))?,
            );
        }

        Ok(self.normalized())
    }

    // An empty credential counts as missing.
    fn normalized(mut self) -> Self {
        self.apis.openweather_api_key = non_empty(self.apis.openweather_api_key);
        self.apis.exchangerate_api_key = non_empty(self.apis.exchangerate_api_key);
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
