//! Render functions for the TUI.
//!
//! Dispatches on `Phase` to the loading skeleton, the card list, the empty
//! message or the failure message.

use crate::app::{App, FeedState, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{cards, selector, skeleton, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Widest the content column gets; wider terminals get side margins.
pub(super) const MAX_CONTENT_WIDTH: u16 = 100;

pub(super) const HEADING: &str = "Latest News";
pub(super) const SUBHEADING: &str = "Stay updated with the latest developments in tech";
pub(super) const EMPTY_MESSAGE: &str = "No articles found in this category.";

/// Main render dispatch function.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let content = content_column(rows[0]);
    match app.phase() {
        Phase::Loading => {
            app.pill_hitboxes.clear();
            skeleton::render(f, app, content);
        }
        Phase::Failed => {
            app.pill_hitboxes.clear();
            let body = render_header(f, app, content);
            render_failure(f, app, body);
        }
        Phase::ReadyWithResults => {
            let body = render_header(f, app, content);
            let body = selector::render(f, app, body);
            cards::render(f, app, body);
        }
        Phase::ReadyEmpty => {
            let body = render_header(f, app, content);
            let body = selector::render(f, app, body);
            render_empty(f, app, body);
        }
    }

    status::render(f, app, rows[1]);
}

/// Center a column of at most `MAX_CONTENT_WIDTH`, with a one-cell gutter.
fn content_column(area: Rect) -> Rect {
    let width = area.width.saturating_sub(2).min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y + 1, width, area.height.saturating_sub(1))
}

/// Draw the heading block and return the area below it.
fn render_header(f: &mut Frame, app: &App, area: Rect) -> Rect {
    let [header, rest] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let lines = vec![
        Line::from(Span::styled(HEADING, app.style("heading"))),
        Line::from(Span::styled(SUBHEADING, app.style("subheading"))),
    ];
    f.render_widget(Paragraph::new(lines), header);
    rest
}

fn render_empty(f: &mut Frame, app: &App, area: Rect) {
    let [_, message] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(area);
    let paragraph = Paragraph::new(Span::styled(EMPTY_MESSAGE, app.style("empty_message")))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, message);
}

fn render_failure(f: &mut Frame, app: &App, area: Rect) {
    let FeedState::Failed { error } = &app.feed else {
        return;
    };
    let [_, message] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    let lines = vec![
        Line::from(Span::styled(
            "Could not load articles.",
            app.style("error_message"),
        )),
        Line::from(Span::styled(error.as_str(), app.style("empty_message"))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, message);
}
