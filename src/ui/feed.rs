//! Headline list widget.

use crate::app::App;
use crate::catalog::format_long_date;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::helpers::truncate_to_width;

/// Render the headline list.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let items: Vec<ListItem> = if app.catalog.is_empty() {
        vec![ListItem::new(app.catalog.label("no_headlines"))]
    } else {
        app.catalog
            .articles()
            .iter()
            .enumerate()
            .map(|(i, article)| {
                let mut spans = Vec::new();

                // Bookmark marker
                if app.session.is_bookmarked(&article.title) {
                    spans.push(Span::styled("★ ", app.palette.headline_bookmark));
                }

                let title_style = if i == app.selected {
                    app.palette.headline_selected
                } else {
                    app.palette.headline_normal
                };

                // Leave room for the date column and borders
                let date_str = format_long_date(article.published);
                let max_title = (area.width as usize)
                    .saturating_sub(date_str.len())
                    .saturating_sub(6);
                spans.push(Span::styled(
                    truncate_to_width(&article.title, max_title),
                    title_style,
                ));
                spans.push(Span::styled(
                    format!("  {}", date_str),
                    app.palette.headline_date,
                ));

                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border)
            .title(app.catalog.label("news_feed")),
    );

    f.render_widget(list, area);
}
