use crate::error::{InfoHubError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    pub text: String,
    pub author: String,
}

impl QuoteEntry {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Read-only list of quotes the adapter draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCatalog {
    quotes: Vec<QuoteEntry>,
}

const BUILTIN: &[(&str, &str)] = &[
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    ("Life is what happens when you're busy making other plans.", "John Lennon"),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    ("The only impossible journey is the one you never begin.", "Tony Robbins"),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    ("You miss 100% of the shots you don't take.", "Wayne Gretzky"),
    (
        "Whether you think you can, or you think you can't - you're right.",
        "Henry Ford",
    ),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
];

impl QuoteCatalog {
    pub fn new(quotes: Vec<QuoteEntry>) -> Self {
        Self { quotes }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(text, author)| QuoteEntry::new(*text, *author))
                .collect(),
        )
    }

    /// Loads a TOML file of `[[quotes]]` tables with `text` and `author` keys.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            InfoHubError::config_error(format!(
                "Failed to read quotes file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: QuoteCatalog = toml::from_str(content).map_err(|e| {
            InfoHubError::config_error(format!("Failed to parse quotes file: {}", e))
        })?;
        if catalog.is_empty() {
            return Err(InfoHubError::config_error("Quotes file contains no quotes"));
        }
        Ok(catalog)
    }

    pub fn get(&self, index: usize) -> Option<&QuoteEntry> {
        self.quotes.get(index)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
