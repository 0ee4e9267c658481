//! Display formatting for article metadata.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Card timestamp layout: month abbreviation, day, year, 2-digit 12h clock.
const PUBLISHED_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Format a publish time in the local time zone, e.g. `Sep 1, 2025, 10:30 AM`.
pub fn format_published(published_at: &DateTime<Utc>) -> String {
    format_published_in(published_at, &Local)
}

/// Format a publish time in an explicit time zone.
pub fn format_published_in<Tz>(published_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    published_at
        .with_timezone(tz)
        .format(PUBLISHED_FORMAT)
        .to_string()
}

/// Avatar initials: the first character of each whitespace-separated token,
/// concatenated without changing case.
pub fn author_initials(author: &str) -> String {
    author
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}
