//! News data: the article record, the embedded dataset, the source seam and
//! the pure derivations (category menu, filter, display formatting).

mod dataset;
mod filter;
mod format;
mod source;
mod types;

pub use dataset::{embedded, parse_dataset};
pub use filter::{derive_categories, filter_by_category, ALL_CATEGORIES};
pub use format::{author_initials, format_published, format_published_in};
pub use source::{MockNewsSource, NewsSource, LOAD_DELAY};
pub use types::{LoadError, NewsItem};
