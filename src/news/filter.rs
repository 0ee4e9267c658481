//! Derived views over the loaded articles.
//!
//! Both functions are pure and cheap for the dataset sizes involved, so the
//! UI recomputes them every frame instead of caching them next to the
//! source collection.

use super::types::NewsItem;
use std::collections::HashSet;

/// Sentinel category meaning "no filtering". Always the first menu entry.
pub const ALL_CATEGORIES: &str = "All";

/// Build the category menu: `"All"` followed by each distinct category in
/// order of first occurrence.
///
/// An empty slice yields just `["All"]`.
pub fn derive_categories(items: &[NewsItem]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    let mut categories = Vec::with_capacity(items.len() + 1);
    categories.push(ALL_CATEGORIES);
    for item in items {
        if seen.insert(item.category.as_str()) {
            categories.push(item.category.as_str());
        }
    }
    categories
}

/// Items visible under `selected`, in their original relative order.
///
/// `"All"` returns every item. Any other value is compared by exact string
/// equality, with no case folding or trimming.
pub fn filter_by_category<'a>(items: &'a [NewsItem], selected: &str) -> Vec<&'a NewsItem> {
    if selected == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category == selected).collect()
}
