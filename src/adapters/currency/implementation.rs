use super::dto::{
    ConversionRates, ConversionResult, ConvertedAmount, CurrencyQuery, TargetCurrency,
};
use crate::adapters::helpers::{build_http_client, build_url, round_half_up_to};
use crate::config::ApiConfig;
use crate::error::{InfoHubError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

pub const BASE_CURRENCY: &str = "INR";
pub const CURRENCY_UNAVAILABLE: &str = "Could not fetch currency data. Please try again later.";

const UPSTREAM: &str = "exchangerate";
const DEFAULT_AMOUNT: f64 = 1.0;

#[derive(Clone)]
pub struct CurrencyAdapter {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CurrencyAdapter {
    pub fn new(apis: &ApiConfig) -> Self {
        Self {
            http: build_http_client(apis.timeout_seconds),
            base_url: apis.exchangerate_base_url.clone(),
            api_key: apis.exchangerate_api_key.clone(),
        }
    }

    pub async fn convert(&self, input: CurrencyQuery) -> Result<ConversionResult> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| InfoHubError::config_error("ExchangeRate API key not configured"))?;

        let amount = parse_amount(input.amount.as_deref())?;

        let url = build_url(&self.base_url, &[api_key, "latest", BASE_CURRENCY]);
        tracing::debug!("Requesting {} rates for amount {}", BASE_CURRENCY, amount);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(InfoHubError::NetworkError)?;

        let status = res.status();
        let body = res.text().await.map_err(InfoHubError::NetworkError)?;

        // Failure payloads still carry `result`/`error-type`, so try to decode before
        // falling back to the status code.
        let parsed = match serde_json::from_str::<ExchangeRateResponse>(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(InfoHubError::upstream(
                    UPSTREAM,
                    format!("request failed with status {}", status),
                ));
            }
            Err(e) => return Err(InfoHubError::SerializationError(e)),
        };

        if parsed.result != "success" {
            return Err(InfoHubError::upstream(
                UPSTREAM,
                format!(
                    "result={} error-type={}",
                    parsed.result,
                    parsed.error_type.as_deref().unwrap_or("unknown")
                ),
            ));
        }
        if !status.is_success() {
            return Err(InfoHubError::upstream(
                UPSTREAM,
                format!("request failed with status {}", status),
            ));
        }

        convert_amount(amount, &parsed.conversion_rates, Utc::now())
    }
}

/// Parses the `amount` query value. Missing or blank means 1.
///
/// Only the leading number is read, so `"100 INR"` is 100 and `"1.5.3"` is 1.5.
/// Input without a leading number is rejected.
pub fn parse_amount(raw: Option<&str>) -> Result<f64> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_AMOUNT),
        Some(raw) => raw,
    };

    match numeric_prefix(raw).and_then(|number| number.parse::<f64>().ok()) {
        Some(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(InfoHubError::validation_error("Amount must be greater than 0")),
    }
}

// Longest leading `[+-]digits[.digits][e[+-]digits]`, with at least one mantissa digit.
fn numeric_prefix(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = bytes[exponent..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    Some(&raw[..end])
}

fn convert_amount(
    amount: f64,
    rates: &HashMap<String, f64>,
    now: DateTime<Utc>,
) -> Result<ConversionResult> {
    let convert = |currency: TargetCurrency| -> Result<ConvertedAmount> {
        let rate = rates.get(currency.code()).copied().ok_or_else(|| {
            InfoHubError::upstream(UPSTREAM, format!("missing {} rate", currency))
        })?;
        Ok(ConvertedAmount {
            amount: format!("{:.2}", round_half_up_to(amount * rate, 2)),
            rate: format!("{:.6}", round_half_up_to(rate, 6)),
        })
    };

    Ok(ConversionResult {
        amount,
        base_currency: BASE_CURRENCY.to_string(),
        rates: ConversionRates {
            usd: convert(TargetCurrency::Usd)?,
            eur: convert(TargetCurrency::Eur)?,
            gbp: convert(TargetCurrency::Gbp)?,
        },
        last_updated: now,
    })
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
}
