//! Article detail widget.
//!
//! Shows the headline, the publish date, and the scrollable wrapped body.
//! A title with no catalog entry renders the fallback content in a distinct
//! style — the miss is never surfaced as an error.

use crate::app::{App, Screen, MAX_SCROLL};
use crate::catalog::format_long_date;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the detail view.
pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    // Update viewport size for scroll clamping (minus 2 for borders), then
    // clamp BEFORE rendering so a resize never draws with a stale offset.
    app.detail_visible_lines = area.height.saturating_sub(2) as usize;
    app.detail_viewport_width = area.width.saturating_sub(2) as usize;
    app.clamp_detail_scroll();

    let Screen::Detail { title } = &app.screen else {
        return;
    };
    let title = title.clone();
    let resolved = app.catalog.resolve(&title);

    let date_line = format!(
        "{} {}",
        app.catalog.label("published_on"),
        format_long_date(resolved.published())
    );

    let body_style = if resolved.is_fallback() {
        app.palette.detail_fallback
    } else {
        app.palette.detail_body
    };

    let mut lines = vec![
        Line::from(Span::styled(title, app.palette.detail_title)),
        Line::from(Span::styled(date_line, app.palette.detail_date)),
        Line::from(""),
    ];
    lines.extend(
        resolved
            .body()
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), body_style))),
    );

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.palette.panel_border)
                .title(app.catalog.label("news_detail")),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset.min(MAX_SCROLL) as u16, 0));

    f.render_widget(paragraph, area);
}
