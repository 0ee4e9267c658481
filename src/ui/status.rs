use crate::app::{App, Phase};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Key hints for the current phase.
pub(super) fn hints(phase: Phase) -> &'static str {
    match phase {
        Phase::Loading => "Loading articles... [q]uit",
        Phase::Failed => "[t]heme [q]uit",
        Phase::ReadyWithResults | Phase::ReadyEmpty => {
            "[←/→]category [Enter]select [1-9]jump [j/k]scroll [t]heme [q]uit"
        }
    }
}

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = match &app.status_message {
        Some((msg, _)) => Cow::Borrowed(msg.as_ref()),
        None => Cow::Borrowed(hints(app.phase())),
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
