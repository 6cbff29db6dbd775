//! Top bar widget: screen title on the left, bookmark indicator and theme
//! switch on the right.

use crate::app::{App, Screen};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the top bar.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let title_key = match app.screen {
        Screen::Feed => "news_feed",
        Screen::Detail { .. } => "news_detail",
    };
    let title = app.catalog.label(title_key);

    // Right side: bookmark state (detail only) + theme switch
    let mut right_spans: Vec<Span> = Vec::new();
    if let Screen::Detail { title } = &app.screen {
        if app.session.is_bookmarked(title) {
            right_spans.push(Span::styled(
                format!("★ {}  ", app.catalog.label("bookmarked")),
                app.palette.bookmark_active,
            ));
        } else {
            right_spans.push(Span::styled(
                format!("☆ {}  ", app.catalog.label("bookmark")),
                app.palette.bookmark_inactive,
            ));
        }
    }
    let switch = if app.session.dark_mode() {
        "[●] Dark "
    } else {
        "[○] Light "
    };
    right_spans.push(Span::styled(switch, app.palette.theme_switch));

    // Pad between the title and the right-aligned spans
    let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
    let left = format!(" {}", title);
    let pad = (area.width as usize)
        .saturating_sub(left.width())
        .saturating_sub(right_width);

    let mut spans = vec![
        Span::styled(left, app.palette.top_bar_title),
        Span::styled(" ".repeat(pad), app.palette.top_bar),
    ];
    spans.extend(right_spans);

    let paragraph = Paragraph::new(Line::from(spans)).style(app.palette.top_bar);
    f.render_widget(paragraph, area);
}
