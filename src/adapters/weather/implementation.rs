use super::dto::{WeatherQuery, WeatherReading};
use crate::adapters::helpers::{build_http_client, build_url, round_half_up};
use crate::config::{ApiConfig, WeatherConfig};
use crate::error::{InfoHubError, Result};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

pub const CITY_NOT_FOUND: &str = "City not found. Please enter a valid city name.";
pub const WEATHER_UNAVAILABLE: &str = "Could not fetch weather data. Please try again later.";

const UPSTREAM: &str = "openweather";

#[derive(Clone)]
pub struct WeatherAdapter {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    default_city: String,
}

impl WeatherAdapter {
    pub fn new(apis: &ApiConfig, weather: &WeatherConfig) -> Self {
        Self {
            http: build_http_client(apis.timeout_seconds),
            base_url: apis.openweather_base_url.clone(),
            api_key: apis.openweather_api_key.clone(),
            default_city: weather.default_city.clone(),
        }
    }

    pub async fn get_weather(&self, input: WeatherQuery) -> Result<WeatherReading> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| InfoHubError::config_error("OpenWeather API key not configured"))?;

        let city = input
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(self.default_city.as_str());

        let url = build_url(&self.base_url, &["weather"]);
        tracing::debug!("Requesting current weather for {} from {}", city, url);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(InfoHubError::NetworkError)?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(InfoHubError::not_found(CITY_NOT_FOUND));
        }
        if !status.is_success() {
            return Err(InfoHubError::upstream(
                UPSTREAM,
                format!("request for {} failed with status {}", city, status),
            ));
        }

        let parsed: OwCurrentResponse = res.json().await.map_err(InfoHubError::NetworkError)?;
        Ok(to_reading(parsed, Utc::now()))
    }
}

fn to_reading(resp: OwCurrentResponse, now: DateTime<Utc>) -> WeatherReading {
    let (condition, description, icon) = match resp.weather.into_iter().next() {
        Some(w) => (w.main, w.description, w.icon),
        None => ("Unknown".to_string(), "Unknown".to_string(), String::new()),
    };

    WeatherReading {
        city: resp.name,
        temperature: round_half_up(resp.main.temp),
        condition,
        description,
        humidity: round_half_up(resp.main.humidity).clamp(0, 100) as u8,
        wind_speed: round_half_up(resp.wind.speed),
        feels_like: round_half_up(resp.main.feels_like),
        pressure: round_half_up(resp.main.pressure),
        visibility: round_half_up(resp.visibility / 1000.0),
        icon,
        last_updated: now,
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    // meters
    #[serde(default)]
    visibility: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    speed: f64,
}
