//! Category selector: a wrapping row of pills.
//!
//! The selected category is filled, the keyboard cursor is underlined, and
//! every pill's screen area is recorded on `App` so mouse clicks can be
//! mapped back to a category.

use crate::app::App;
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Columns between adjacent pills.
const PILL_GAP: u16 = 1;

/// Lay out pills of the given labels left to right, wrapping to a new row
/// when the next pill would overflow `width`. Rects are relative to (0, 0).
pub(super) fn layout_pills(labels: &[&str], width: u16) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(labels.len());
    let (mut x, mut y) = (0u16, 0u16);
    for label in labels {
        let pill_width = (display_width(label) as u16).saturating_add(2).min(width);
        if x > 0 && x + pill_width > width {
            x = 0;
            y += 1;
        }
        rects.push(Rect::new(x, y, pill_width, 1));
        x = x.saturating_add(pill_width + PILL_GAP);
    }
    rects
}

/// Draw the selector at the top of `area`; returns the area below it.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) -> Rect {
    let labels: Vec<String> = app.categories().iter().map(|c| c.to_string()).collect();
    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let rects = layout_pills(&label_refs, area.width);

    let rows = rects.iter().map(|r| r.y + 1).max().unwrap_or(0);
    let used = (rows + 1).min(area.height);

    app.pill_hitboxes.clear();
    for (idx, (label, rel)) in labels.iter().zip(&rects).enumerate() {
        if rel.y >= area.height {
            break;
        }
        let abs = Rect::new(area.x + rel.x, area.y + rel.y, rel.width, 1);

        let mut style = if *label == app.selected_category {
            app.style("pill_selected")
        } else {
            app.style("pill")
        };
        if idx == app.category_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let text = truncate_to_width(label, rel.width.saturating_sub(2) as usize);
        f.render_widget(Paragraph::new(Span::styled(format!(" {} ", text), style)), abs);
        app.pill_hitboxes.push((abs, idx));
    }

    Rect {
        y: area.y + used,
        height: area.height - used,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::tests::{draw, ready_app};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pills_share_a_row_when_they_fit() {
        let rects = layout_pills(&["All", "React", "CSS"], 40);
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 5, 1),
                Rect::new(6, 0, 7, 1),
                Rect::new(14, 0, 5, 1),
            ]
        );
    }

    #[test]
    fn test_pills_wrap_when_row_is_full() {
        let rects = layout_pills(&["All", "Technology", "React"], 18);
        assert_eq!(rects[0], Rect::new(0, 0, 5, 1));
        assert_eq!(rects[1], Rect::new(6, 0, 12, 1));
        assert_eq!(rects[2], Rect::new(0, 1, 7, 1));
    }

    #[test]
    fn test_oversized_pill_is_clamped_to_width() {
        let rects = layout_pills(&["An extremely long category label"], 10);
        assert_eq!(rects[0], Rect::new(0, 0, 10, 1));
    }

    #[test]
    fn test_no_labels_no_pills() {
        assert!(layout_pills(&[], 10).is_empty());
    }

    #[test]
    fn test_every_category_is_clickable() {
        let mut app = ready_app();
        draw(&mut app, 50, 40);
        let indices: Vec<usize> = app.pill_hitboxes.iter().map(|(_, i)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);

        // Click the "CSS" pill using the rect recorded during render.
        let (rect, _) = app.pill_hitboxes[4];
        assert!(app.select_at_position(rect.x + 1, rect.y));
        assert_eq!(app.selected_category, "CSS");
        assert_eq!(app.filtered().len(), 1);
    }
}
