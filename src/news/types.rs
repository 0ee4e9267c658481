use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Failures that keep the news list from reaching the ready state.
///
/// An empty filter result is not represented here: it is a normal view state.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The embedded dataset is not valid JSON or does not match `NewsItem`.
    #[error("Failed to parse news dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("News dataset contains duplicate id {0}")]
    DuplicateId(u32),

    /// The source reported that no data could be produced.
    #[error("News source unavailable: {0}")]
    Unavailable(String),

    /// The load task panicked before it could report a result.
    #[error("News load task panicked: {0}")]
    Panicked(String),
}

// ============================================================================
// News Item
// ============================================================================

/// A single article in the news list.
///
/// Records are immutable once loaded; the view only ever filters them.
/// Field names on the wire are camelCase (`publishedAt`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub author: String,
    /// ISO-8601 with offset in the dataset, normalised to UTC.
    pub published_at: DateTime<Utc>,
    /// Display label and filter key. Many items share a category.
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
