use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub text: String,
    pub author: String,
    /// Index into the catalog the quote was drawn from.
    pub id: usize,
    pub total_quotes: usize,
    pub fetched_at: DateTime<Utc>,
}
