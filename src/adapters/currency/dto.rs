use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CurrencyQuery {
    // Kept as text so a malformed amount reaches validation instead of failing extraction.
    pub amount: Option<String>,
}

/// The fixed set of currencies INR is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetCurrency {
    Usd,
    Eur,
    Gbp,
}

impl TargetCurrency {
    pub fn code(&self) -> &'static str {
        match self {
            TargetCurrency::Usd => "USD",
            TargetCurrency::Eur => "EUR",
            TargetCurrency::Gbp => "GBP",
        }
    }

    pub const fn all() -> &'static [TargetCurrency] {
        &[TargetCurrency::Usd, TargetCurrency::Eur, TargetCurrency::Gbp]
    }
}

impl std::fmt::Display for TargetCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Display strings only; nothing downstream does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedAmount {
    /// `amount * rate`, two decimals.
    pub amount: String,
    /// Units of the target currency per INR, six decimals.
    pub rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRates {
    #[serde(rename = "USD")]
    pub usd: ConvertedAmount,
    #[serde(rename = "EUR")]
    pub eur: ConvertedAmount,
    #[serde(rename = "GBP")]
    pub gbp: ConvertedAmount,
}

impl ConversionRates {
    pub fn get(&self, currency: TargetCurrency) -> &ConvertedAmount {
        match currency {
            TargetCurrency::Usd => &self.usd,
            TargetCurrency::Eur => &self.eur,
            TargetCurrency::Gbp => &self.gbp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub amount: f64,
    pub base_currency: String,
    pub rates: ConversionRates,
    pub last_updated: DateTime<Utc>,
}
