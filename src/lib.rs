//! headlines: a terminal news browser.
//!
//! The library exposes the pieces the binary wires together, so integration
//! tests can drive the view without a real terminal.

pub mod app;
pub mod config;
pub mod news;
pub mod theme;
pub mod ui;
pub mod util;
