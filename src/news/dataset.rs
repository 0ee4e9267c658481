//! Embedded mock dataset.
//!
//! The dataset ships inside the binary as a JSON document and stands in for a
//! remote news API. Nothing is read from disk or the network at runtime.

use super::types::{LoadError, NewsItem};
use std::collections::HashSet;

/// Raw JSON for the built-in articles.
const EMBEDDED_DATASET: &str = include_str!("dataset.json");

/// Parse and validate the built-in dataset.
pub fn embedded() -> Result<Vec<NewsItem>, LoadError> {
    parse_dataset(EMBEDDED_DATASET)
}

/// Parse a JSON array of news records, rejecting duplicate ids.
///
/// Record order is preserved; it drives both the card order and the
/// first-seen order of the category menu.
pub fn parse_dataset(json: &str) -> Result<Vec<NewsItem>, LoadError> {
    let items: Vec<NewsItem> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id) {
            return Err(LoadError::DuplicateId(item.id));
        }
    }

    tracing::debug!(items = items.len(), "Parsed news dataset");
    Ok(items)
}
