//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// Every semantic UI role mapped to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub heading: Style,
    pub subheading: Style,

    // -- Loading skeleton --
    pub skeleton: Style,
    pub skeleton_pulse: Style,

    // -- Category selector --
    pub pill: Style,
    pub pill_selected: Style,

    // -- Cards --
    pub card_border: Style,
    pub card_image: Style,
    pub card_badge: Style,
    pub card_date: Style,
    pub card_title: Style,
    pub card_summary: Style,
    pub card_avatar: Style,
    pub card_author: Style,
    pub card_read_more: Style,

    // -- Messages --
    pub empty_message: Style,
    pub error_message: Style,

    // -- Chrome --
    pub status_bar: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            subheading: Style::default().fg(Color::Gray),

            skeleton: Style::default().fg(Color::DarkGray),
            skeleton_pulse: Style::default().fg(Color::Gray),

            pill: Style::default().bg(Color::DarkGray).fg(Color::Gray),
            pill_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            card_border: Style::default().fg(Color::DarkGray),
            card_image: Style::default().fg(Color::DarkGray),
            card_badge: Style::default().bg(Color::Blue).fg(Color::LightCyan),
            card_date: Style::default().fg(Color::DarkGray),
            card_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_summary: Style::default().fg(Color::Gray),
            card_avatar: Style::default().bg(Color::DarkGray).fg(Color::Gray),
            card_author: Style::default().fg(Color::Gray),
            card_read_more: Style::default().fg(Color::LightBlue),

            empty_message: Style::default().fg(Color::DarkGray),
            error_message: Style::default().fg(Color::Red),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    /// Adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            heading: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            subheading: Style::default().fg(Color::DarkGray),

            skeleton: Style::default().fg(Color::Gray),
            skeleton_pulse: Style::default().fg(Color::DarkGray),

            pill: Style::default().bg(Color::Gray).fg(Color::Black),
            pill_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            card_border: Style::default().fg(Color::Gray),
            card_image: Style::default().fg(Color::Gray),
            card_badge: Style::default().bg(Color::LightBlue).fg(Color::Blue),
            card_date: Style::default().fg(Color::DarkGray),
            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_summary: Style::default().fg(Color::DarkGray),
            card_avatar: Style::default().bg(Color::Gray).fg(Color::DarkGray),
            card_author: Style::default().fg(Color::DarkGray),
            card_read_more: Style::default().fg(Color::Blue),

            empty_message: Style::default().fg(Color::DarkGray),
            error_message: Style::default().fg(Color::Red),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
        }
    }
}

// ============================================================================
// Style Map
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 18] = [
    "heading",
    "subheading",
    "skeleton",
    "skeleton_pulse",
    "pill",
    "pill_selected",
    "card_border",
    "card_image",
    "card_badge",
    "card_date",
    "card_title",
    "card_summary",
    "card_avatar",
    "card_author",
    "card_read_more",
    "empty_message",
    "error_message",
    "status_bar",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 18] = [
            p.heading,
            p.subheading,
            p.skeleton,
            p.skeleton_pulse,
            p.pill,
            p.pill_selected,
            p.card_border,
            p.card_image,
            p.card_badge,
            p.card_date,
            p.card_title,
            p.card_summary,
            p.card_avatar,
            p.card_author,
            p.card_read_more,
            p.empty_message,
            p.error_message,
            p.status_bar,
        ];

        let map = ROLE_NAMES
            .iter()
            .copied()
            .zip(styles.iter().copied())
            .collect();

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
