//! Utility functions shared by the view and the load task.
//!
//! - **Text**: Unicode-aware display width and truncation for terminal cells
//! - **Tasks**: panic capture for spawned background work
//! - **Logging**: where tracing output goes while the TUI is up

mod logging;
mod task;
mod text;

pub use logging::log_writer;
pub use task::catch_task_panic;
pub use text::{display_width, truncate_to_width};
