use crate::app::{App, SKELETON_CARDS};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Placeholder glyph for skeleton bars.
pub(super) const BAR: &str = "▆";

/// Height of one placeholder card including borders.
const CARD_HEIGHT: u16 = 7;

/// Bar widths inside a placeholder card, as fractions of the inner width.
/// `None` is a spacer row.
const CARD_BARS: [Option<(u16, u16)>; 5] = [
    Some((3, 4)),
    Some((1, 2)),
    None,
    Some((1, 1)),
    Some((2, 3)),
];

fn bar(width: u16, numerator: u16, denominator: u16) -> String {
    let n = (width as u32 * numerator as u32 / denominator as u32) as usize;
    BAR.repeat(n)
}

/// Render the loading placeholder: a heading bar and `SKELETON_CARDS` cards.
///
/// The bars alternate between two shades on every pulse frame.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.pulse_frame % 2 == 0 {
        app.style("skeleton")
    } else {
        app.style("skeleton_pulse")
    };

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend((0..SKELETON_CARDS).map(|_| Constraint::Length(CARD_HEIGHT + 1)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    let heading = Paragraph::new(Span::styled(bar(area.width, 1, 4), style));
    f.render_widget(heading, rows[0]);

    for slot in rows.iter().skip(1).take(SKELETON_CARDS) {
        let card_area = Rect {
            height: slot.height.min(CARD_HEIGHT),
            ..*slot
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(app.style("card_border"));
        let inner = block.inner(card_area);

        let lines: Vec<Line> = CARD_BARS
            .iter()
            .map(|row| match row {
                Some((num, den)) => Line::from(Span::styled(bar(inner.width, *num, *den), style)),
                None => Line::default(),
            })
            .collect();

        f.render_widget(block, card_area);
        f.render_widget(Paragraph::new(lines), inner);
    }
}
