//! Application event handling.
//!
//! Applies background task results to `App`.

use crate::app::{App, AppEvent};
use crate::news::LoadError;

/// Handle an event from a background task.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::NewsLoaded { generation, result } => {
            if app.complete_load(generation, result) {
                app.needs_redraw = true;
            }
        }
        AppEvent::TaskPanicked {
            task,
            generation,
            error,
        } => {
            tracing::error!(task, error = %error, "Background task panicked");
            if app.complete_load(generation, Err(LoadError::Panicked(error))) {
                app.set_status("Loading failed unexpectedly");
            }
        }
    }
}
