pub mod catalog;
pub mod dto;
pub mod handler;
pub mod implementation;
pub mod picker;

pub use catalog::{QuoteCatalog, QuoteEntry};
pub use dto::Quote;
pub(crate) use handler::get_quote;
pub use implementation::{QuoteAdapter, QUOTE_UNAVAILABLE};
pub use picker::{FixedPicker, QuotePicker, RandomPicker, SeededPicker};
