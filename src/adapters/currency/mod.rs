pub mod dto;
pub mod handler;
pub mod implementation;

pub use dto::{ConversionRates, ConversionResult, ConvertedAmount, CurrencyQuery, TargetCurrency};
pub(crate) use handler::get_conversion;
pub use implementation::{parse_amount, CurrencyAdapter, BASE_CURRENCY, CURRENCY_UNAVAILABLE};
