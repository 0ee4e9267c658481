//! Input handling for the TUI.
//!
//! Keyboard and mouse input both funnel into the same `App` transitions, so
//! a click on a pill and `Enter` on the cursor behave identically.

use crate::app::App;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::Action;

/// Handle a key press.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,

        KeyCode::Left | KeyCode::Char('h') => app.cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => app.cursor_right(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_at_cursor();
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as u8 - b'1') as usize;
            app.select_category_index(index);
        }

        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),

        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }

        _ => {}
    }
    Action::Continue
}

/// Handle a mouse event. Only left clicks on category pills do anything.
pub(super) fn handle_mouse(app: &mut App, event: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = event.kind {
        app.select_at_position(event.column, event.row);
    }
}
