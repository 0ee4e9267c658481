//! Article cards.

use crate::app::App;
use crate::news::{author_initials, format_published, NewsItem};
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Inert affordance; there is no full-article view to open.
pub(super) const READ_MORE: &str = "Read more →";

/// Blank rows between consecutive cards.
const CARD_GAP: u16 = 1;

/// Text rows of one card, before wrapping, for an inner width of `width`.
///
/// `published` is passed in pre-formatted so tests can pin the time zone.
pub(super) fn card_lines<'a>(
    app: &App,
    item: &'a NewsItem,
    published: String,
    width: usize,
) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(7);

    if let Some(url) = &item.image_url {
        let label = "▣ image ";
        let url = truncate_to_width(url, width.saturating_sub(display_width(label)));
        lines.push(Line::from(vec![
            Span::styled(label, app.style("card_image")),
            Span::styled(url.into_owned(), app.style("card_image")),
        ]));
    }

    let badge = format!(" {} ", item.category);
    lines.push(spread(
        Span::styled(badge, app.style("card_badge")),
        Span::styled(published, app.style("card_date")),
        width,
    ));

    lines.push(Line::from(Span::styled(
        item.title.as_str(),
        app.style("card_title"),
    )));
    lines.push(Line::from(Span::styled(
        item.summary.as_str(),
        app.style("card_summary"),
    )));
    lines.push(Line::default());

    let avatar = format!("({})", author_initials(&item.author));
    let byline = [
        Span::styled(avatar, app.style("card_avatar")),
        Span::raw(" "),
        Span::styled(item.author.as_str(), app.style("card_author")),
    ];
    let used: usize = byline.iter().map(|s| display_width(&s.content)).sum();
    let gap = width
        .saturating_sub(used + display_width(READ_MORE))
        .max(1);
    let mut footer = Vec::from(byline);
    footer.push(Span::raw(" ".repeat(gap)));
    footer.push(Span::styled(READ_MORE, app.style("card_read_more")));
    lines.push(Line::from(footer));

    lines
}

/// Put `left` and `right` on one line, pushing `right` to the edge.
fn spread<'a>(left: Span<'a>, right: Span<'a>, width: usize) -> Line<'a> {
    let used = display_width(&left.content) + display_width(&right.content);
    let gap = width.saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}

/// Render the filtered articles from `app.scroll_offset` downward.
///
/// A card that does not fully fit at the bottom is clipped.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered();
    let inner_width = area.width.saturating_sub(4);
    let mut y = area.y;
    let bottom = area.y + area.height;

    for item in filtered.iter().skip(app.scroll_offset) {
        if y >= bottom {
            break;
        }

        let lines = card_lines(
            app,
            item,
            format_published(&item.published_at),
            inner_width as usize,
        );
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let height = paragraph.line_count(inner_width) as u16 + 2;

        let card_area = Rect::new(area.x, y, area.width, height.min(bottom - y));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(app.style("card_border"))
            .padding(Padding::horizontal(1));

        f.render_widget(paragraph.block(block), card_area);
        y = y.saturating_add(height + CARD_GAP);
    }
}
