use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

/// Current conditions for one city, in metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub city: String,
    /// Degrees Celsius.
    pub temperature: i64,
    pub condition: String,
    pub description: String,
    /// Relative humidity, 0-100.
    pub humidity: u8,
    pub wind_speed: i64,
    pub feels_like: i64,
    /// hPa.
    pub pressure: i64,
    /// Kilometres.
    pub visibility: i64,
    pub icon: String,
    /// When this reading was built, not when the upstream observed it.
    pub last_updated: DateTime<Utc>,
}
