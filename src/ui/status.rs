//! Status bar widget: transient messages or key hints.

use crate::app::{App, Screen};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocations for the static hint strings
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.screen {
            Screen::Feed => {
                Cow::Borrowed("[j/k]move [Enter]open [b]ookmark [t]heme [?]help [q]uit")
            }
            Screen::Detail { .. } => {
                Cow::Borrowed("[Esc]back [j/k]scroll [Ctrl+d/u]page [b]ookmark [t]heme [q]uit")
            }
        }
    };

    let paragraph = Paragraph::new(text).style(app.palette.status_bar);
    f.render_widget(paragraph, area);
}
