//! Terminal User Interface module.
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard and mouse input handling
//! - `events` - Background task event processing
//! - `render` - Phase dispatch and page layout
//! - `skeleton` - Loading placeholder
//! - `selector` - Category pills
//! - `cards` - Article cards
//! - `status` - Status bar

mod cards;
mod events;
mod input;
mod loop_runner;
mod render;
mod selector;
mod skeleton;
mod status;

pub use loop_runner::{run, Action};
pub use render::render;
