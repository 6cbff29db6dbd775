//! Input handling for the TUI.
//!
//! Processes keyboard input and dispatches through the keybinding registry
//! based on the current screen. The help overlay captures all keys while
//! visible.

use crate::app::{App, Screen};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Lines scrolled by a page up/down in the detail view.
const PAGE_LINES: usize = 10;

/// Map the current screen to a keybinding context.
fn screen_to_context(screen: &Screen) -> KbContext {
    match screen {
        Screen::Feed => KbContext::Feed,
        Screen::Detail { .. } => KbContext::Detail,
    }
}

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Help overlay captures all keys when visible
    if app.show_help {
        return handle_help_input(app, code);
    }

    let context = screen_to_context(&app.screen);
    let action = app.keybindings.action_for_key(code, modifiers, context);

    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::Select) => app.open_selected(),
        Some(KbAction::Back) => app.back(),
        Some(KbAction::ToggleBookmark) => {
            if let Some((title, bookmarked)) = app.toggle_bookmark() {
                let verb = if bookmarked {
                    "Bookmarked"
                } else {
                    "Removed bookmark"
                };
                app.set_status(format!("{}: {}", verb, title));
            }
        }
        Some(KbAction::ToggleTheme) => {
            let name = app.toggle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        Some(KbAction::ScrollDown) => {
            app.scroll_down(1);
            app.clamp_detail_scroll();
        }
        Some(KbAction::ScrollUp) => app.scroll_up(1),
        Some(KbAction::PageDown) => {
            app.scroll_down(PAGE_LINES);
            app.clamp_detail_scroll();
        }
        Some(KbAction::PageUp) => app.scroll_up(PAGE_LINES),
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        None => {}
    }

    Action::Continue
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::theme::ThemeVariant;

    fn test_app() -> App {
        let catalog = Catalog::from_toml_str(
            r#"
[[article]]
title = "One"
published = "2025-03-14"
body = "one"

[[article]]
title = "Two"
published = "2025-03-12"
body = "two"
"#,
        )
        .unwrap();
        App::new(catalog, ThemeVariant::default())
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_input(app, code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_from_feed() {
        let mut app = test_app();
        assert!(matches!(press(&mut app, KeyCode::Char('q')), Action::Quit));
    }

    #[test]
    fn enter_opens_detail_and_esc_returns() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.screen,
            Screen::Detail {
                title: "Two".to_string()
            }
        );
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Feed);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn bookmark_key_sets_status() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('b'));
        assert!(app.session.is_bookmarked("One"));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.contains("Bookmarked"));

        press(&mut app, KeyCode::Char('b'));
        assert!(!app.session.is_bookmarked("One"));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.contains("Removed bookmark"));
    }

    #[test]
    fn theme_key_toggles_in_both_screens() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('t'));
        assert!(app.session.dark_mode());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('t'));
        assert!(!app.session.dark_mode());
    }

    #[test]
    fn j_scrolls_in_detail_but_navigates_in_feed() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 1);

        press(&mut app, KeyCode::Enter);
        app.detail_viewport_width = 80;
        app.detail_visible_lines = 2;
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 1); // selection untouched in detail
        assert!(app.scroll_offset > 0);
    }

    #[test]
    fn help_overlay_captures_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // Navigation keys scroll the overlay instead of the feed
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 0);
        assert_eq!(app.help_scroll_offset, 1);

        // q dismisses rather than quitting
        assert!(matches!(
            press(&mut app, KeyCode::Char('q')),
            Action::Continue
        ));
        assert!(!app.show_help);
    }
}
