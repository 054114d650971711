use super::implementation::DashboardClient;
use super::state::Panel;
use crate::adapters::{ConversionResult, Quote, WeatherReading};

pub const WEATHER_FAILED: &str = "Failed to fetch weather data.";
pub const CURRENCY_FAILED: &str = "Failed to fetch currency data.";
pub const QUOTE_FAILED: &str = "Failed to fetch quote.";
pub const NON_POSITIVE_AMOUNT: &str = "Please enter a positive amount";

/// The three dashboard modules wired to one API client. Nothing is cached: every
/// load goes back to the server.
pub struct Dashboard {
    client: DashboardClient,
    city: String,
    amount: f64,
    pub weather: Panel<WeatherReading>,
    pub currency: Panel<ConversionResult>,
    pub quote: Panel<Quote>,
}

impl Dashboard {
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            city: "London".to_string(),
            amount: 100.0,
            weather: Panel::new(WEATHER_FAILED),
            currency: Panel::new(CURRENCY_FAILED),
            quote: Panel::new(QUOTE_FAILED),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Initial load of every module, as on first mount.
    pub async fn refresh(&mut self) {
        self.retry_weather().await;
        self.retry_conversion().await;
        self.load_quote().await;
    }

    /// Blank input is ignored. The city is remembered only once the server accepts it.
    pub async fn load_weather(&mut self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }
        self.weather.begin();
        let outcome = self.client.fetch_weather(city).await;
        if outcome.is_ok() {
            self.city = city.to_string();
        }
        self.weather.finish(outcome);
    }

    pub async fn load_conversion(&mut self, amount: f64) {
        self.amount = amount;
        if amount.is_nan() || amount <= 0.0 {
            self.currency.fail(NON_POSITIVE_AMOUNT);
            return;
        }
        self.currency.begin();
        let outcome = self.client.fetch_conversion(amount).await;
        self.currency.finish(outcome);
    }

    /// Re-issues the last accepted city.
    pub async fn retry_weather(&mut self) {
        let city = self.city.clone();
        self.load_weather(&city).await;
    }

    /// Re-issues the last entered amount, including one that was rejected locally.
    pub async fn retry_conversion(&mut self) {
        self.load_conversion(self.amount).await;
    }

    pub async fn load_quote(&mut self) {
        self.quote.begin();
        let outcome = self.client.fetch_quote().await;
        self.quote.finish(outcome);
    }
}
