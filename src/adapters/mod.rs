pub mod currency;
pub mod helpers;
pub mod quote;
pub mod weather;

pub use currency::{
    ConversionResult, ConvertedAmount, CurrencyAdapter, CurrencyQuery, TargetCurrency,
};
pub use quote::{
    FixedPicker, Quote, QuoteAdapter, QuoteCatalog, QuoteEntry, QuotePicker, RandomPicker,
    SeededPicker,
};
pub use weather::{WeatherAdapter, WeatherQuery, WeatherReading};
