use super::catalog::QuoteCatalog;
use super::dto::Quote;
use super::picker::{QuotePicker, RandomPicker, SeededPicker};
use crate::config::QuoteConfig;
use crate::error::{InfoHubError, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

pub const QUOTE_UNAVAILABLE: &str = "Could not fetch quote data. Please try again later.";

#[derive(Clone)]
pub struct QuoteAdapter {
    catalog: Arc<QuoteCatalog>,
    picker: Arc<dyn QuotePicker>,
    // Keeps quote latency in line with the network-bound panels.
    delay: Duration,
}

impl QuoteAdapter {
    pub fn new(catalog: QuoteCatalog, picker: Arc<dyn QuotePicker>, delay: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            picker,
            delay,
        }
    }

    pub fn from_config(config: &QuoteConfig) -> Result<Self> {
        let catalog = match &config.file {
            Some(path) => QuoteCatalog::from_file(path)?,
            None => QuoteCatalog::builtin(),
        };
        let picker: Arc<dyn QuotePicker> = match config.seed {
            Some(seed) => Arc::new(SeededPicker::new(seed)),
            None => Arc::new(RandomPicker),
        };
        Ok(Self::new(
            catalog,
            picker,
            Duration::from_millis(config.delay_ms),
        ))
    }

    pub fn catalog(&self) -> &QuoteCatalog {
        &self.catalog
    }

    pub async fn get_quote(&self) -> Result<Quote> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let total_quotes = self.catalog.len();
        if total_quotes == 0 {
            return Err(InfoHubError::internal("quote catalog is empty"));
        }

        let id = self.picker.pick(total_quotes);
        let entry = self.catalog.get(id).ok_or_else(|| {
            InfoHubError::internal(format!(
                "picker returned index {} for {} quotes",
                id, total_quotes
            ))
        })?;

        Ok(Quote {
            text: entry.text.clone(),
            author: entry.author.clone(),
            id,
            total_quotes,
            fetched_at: Utc::now(),
        })
    }
}
