//! Central application state and the two-screen navigation controller.
//!
//! `App` owns the catalog, the session state (theme + bookmarks), and the
//! current screen. Navigation is a two-state machine: `Feed` (initial) and
//! `Detail(title)`. Back always returns to the feed; there is no deeper
//! stack and round-tripping loses no session state.

use crate::catalog::{Article, Catalog};
use crate::keybindings::KeybindingRegistry;
use crate::session::SessionState;
use crate::theme::{ColorPalette, ThemeVariant};
use std::borrow::Cow;
use tokio::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Maximum scroll offset for the detail view (ratatui u16 limit).
pub const MAX_SCROLL: usize = u16::MAX as usize;

// ============================================================================
// Navigation
// ============================================================================

/// Current screen.
///
/// `Detail` carries the selected article's title; the title is the lookup
/// key, and any title is valid — a miss renders the fallback content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Feed,
    Detail { title: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    /// Static article catalog, loaded once at startup.
    pub catalog: Catalog,
    /// Theme + bookmark state for this session.
    pub session: SessionState,
    /// Keybinding registry for action-key mapping with config overrides.
    pub keybindings: KeybindingRegistry,

    /// Active style palette, rebuilt whenever the theme toggles.
    pub palette: ColorPalette,

    // Navigation
    pub screen: Screen,
    /// Selected headline index in the feed list.
    pub selected: usize,
    /// Scroll offset in the detail view.
    pub scroll_offset: usize,

    /// Last known detail viewport height (lines, excluding borders).
    /// Updated during rendering to enable scroll clamping in input handlers.
    pub detail_visible_lines: usize,
    /// Last known detail viewport width (characters, excluding borders).
    pub detail_viewport_width: usize,

    /// Transient status message with creation time (3 second expiry).
    /// Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,

    /// Whether the help overlay is currently displayed.
    pub show_help: bool,
    /// Scroll offset in the help overlay.
    pub help_scroll_offset: usize,
}

impl App {
    pub fn new(catalog: Catalog, theme: ThemeVariant) -> Self {
        Self {
            catalog,
            session: SessionState::new(theme),
            keybindings: KeybindingRegistry::new(),
            palette: theme.palette(),
            screen: Screen::Feed,
            selected: 0,
            scroll_offset: 0,
            detail_visible_lines: 0,
            detail_viewport_width: 0,
            status_message: None,
            needs_redraw: true,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Toggle the theme and rebuild the palette.
    ///
    /// Returns the name of the new variant for status display.
    pub fn toggle_theme(&mut self) -> &'static str {
        let variant = self.session.toggle_theme();
        self.palette = variant.palette();
        self.needs_redraw = true;
        variant.name()
    }

    // ========================================================================
    // Feed Selection
    // ========================================================================

    /// Navigate up in the headline list.
    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Navigate down in the headline list.
    pub fn nav_down(&mut self) {
        if !self.catalog.is_empty() {
            let max_index = self.catalog.len().saturating_sub(1);
            self.selected = self.selected.saturating_add(1).min(max_index);
        }
    }

    /// Currently selected headline (bounds-checked).
    pub fn selected_article(&self) -> Option<&Article> {
        self.catalog.articles().get(self.selected)
    }

    /// Clamp the selection index to the catalog bounds.
    pub fn clamp_selection(&mut self) {
        self.selected = if self.catalog.is_empty() {
            0
        } else {
            self.selected.min(self.catalog.len().saturating_sub(1))
        };
    }

    // ========================================================================
    // Navigation Transitions
    // ========================================================================

    /// Feed → Detail for the currently selected headline.
    ///
    /// No-op when the catalog is empty or not on the feed screen.
    pub fn open_selected(&mut self) {
        if self.screen != Screen::Feed {
            return;
        }
        if let Some(article) = self.selected_article() {
            let title = article.title.clone();
            self.open_detail(title);
        }
    }

    /// Feed → Detail for an explicit title.
    ///
    /// Valid for any title, including ones absent from the catalog — the
    /// detail screen then renders the fallback content.
    pub fn open_detail(&mut self, title: String) {
        tracing::debug!(title = %title, "Entering detail view");
        self.screen = Screen::Detail { title };
        self.scroll_offset = 0;
        self.needs_redraw = true;
    }

    /// Detail → Feed. Session state and feed selection are untouched.
    pub fn back(&mut self) {
        if matches!(self.screen, Screen::Detail { .. }) {
            tracing::debug!("Returning to feed view");
            self.screen = Screen::Feed;
            self.scroll_offset = 0;
            self.needs_redraw = true;
        }
    }

    /// Title of the article the current screen is about: the detail view's
    /// title, or the selected headline on the feed.
    pub fn current_title(&self) -> Option<&str> {
        match &self.screen {
            Screen::Detail { title } => Some(title),
            Screen::Feed => self.selected_article().map(|a| a.title.as_str()),
        }
    }

    // ========================================================================
    // Bookmarks
    // ========================================================================

    /// Toggle the bookmark for the current screen's article.
    ///
    /// Returns the affected title and the new bookmark state, or None when
    /// there is no current article (empty catalog on the feed screen).
    pub fn toggle_bookmark(&mut self) -> Option<(String, bool)> {
        let title = self.current_title()?.to_string();
        let bookmarked = self.session.toggle_bookmark(&title);
        self.needs_redraw = true;
        Some((title, bookmarked))
    }

    // ========================================================================
    // Detail Scrolling
    // ========================================================================

    /// Scroll up in the detail view.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll down in the detail view.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    /// Number of display lines the detail view occupies after wrapping,
    /// including the 3-line header (title, date, blank).
    pub fn detail_content_lines(&self) -> usize {
        const HEADER_LINES: usize = 3;
        let width = self.detail_viewport_width.max(1);

        let Screen::Detail { title } = &self.screen else {
            return 0;
        };
        let resolved = self.catalog.resolve(title);
        let body = resolved.body();

        let body_lines: usize = body
            .lines()
            .map(|l| l.width().max(1).div_ceil(width))
            .sum();
        HEADER_LINES + body_lines
    }

    /// Clamp the detail scroll offset to the content bounds.
    ///
    /// Call after scrolling or when the viewport size changes, so the view
    /// never scrolls past the end of the article.
    pub fn clamp_detail_scroll(&mut self) {
        let content_lines = self.detail_content_lines();
        let max_scroll = content_lines.saturating_sub(self.detail_visible_lines);
        self.scroll_offset = self.scroll_offset.min(max_scroll).min(MAX_SCROLL);
    }

    // ========================================================================
    // Status Messages
    // ========================================================================

    /// Set a status message (auto-expires after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear the status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{self, Duration};

    fn test_catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
[[article]]
title = "Alpha"
published = "2025-03-14"
body = "alpha body"

[[article]]
title = "Beta"
published = "2025-03-12"
body = "beta body"

[[article]]
title = "Gamma"
published = "2025-03-10"
body = "gamma body"
"#,
        )
        .unwrap()
    }

    fn test_app() -> App {
        App::new(test_catalog(), ThemeVariant::default())
    }

    #[test]
    fn fresh_app_starts_on_feed_with_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Feed);
        assert_eq!(app.selected, 0);
        assert!(!app.session.dark_mode());
        assert_eq!(app.session.bookmark_count(), 0);
    }

    #[test]
    fn nav_clamps_to_catalog_bounds() {
        let mut app = test_app();
        app.nav_up();
        assert_eq!(app.selected, 0); // saturates at 0
        for _ in 0..10 {
            app.nav_down();
        }
        assert_eq!(app.selected, 2); // clamped to last index
    }

    #[test]
    fn nav_on_empty_catalog_is_safe() {
        let mut app = App::new(
            Catalog::from_toml_str("").unwrap(),
            ThemeVariant::default(),
        );
        app.nav_down();
        app.nav_up();
        assert_eq!(app.selected, 0);
        assert!(app.selected_article().is_none());
        assert!(app.toggle_bookmark().is_none());
    }

    #[test]
    fn open_selected_enters_detail_with_title() {
        let mut app = test_app();
        app.nav_down();
        app.open_selected();
        assert_eq!(
            app.screen,
            Screen::Detail {
                title: "Beta".to_string()
            }
        );
    }

    #[test]
    fn open_detail_accepts_unknown_titles() {
        let mut app = test_app();
        app.open_detail("Not In Catalog".to_string());
        assert!(matches!(app.screen, Screen::Detail { .. }));
        // Detail content falls back rather than erroring
        assert!(app.catalog.resolve("Not In Catalog").is_fallback());
    }

    #[test]
    fn back_restores_feed_without_state_loss() {
        let mut app = test_app();
        app.nav_down();
        app.toggle_theme();
        app.open_selected();
        app.toggle_bookmark();

        app.back();

        assert_eq!(app.screen, Screen::Feed);
        assert_eq!(app.selected, 1); // selection preserved
        assert!(app.session.dark_mode()); // theme preserved
        assert!(app.session.is_bookmarked("Beta")); // bookmark preserved
    }

    #[test]
    fn back_on_feed_is_noop() {
        let mut app = test_app();
        app.back();
        assert_eq!(app.screen, Screen::Feed);
    }

    #[test]
    fn bookmark_survives_detail_reentry() {
        let mut app = test_app();
        app.nav_down();
        app.nav_down(); // 3rd headline
        app.open_selected();
        app.toggle_bookmark();
        app.back();
        app.open_selected();

        assert!(app.session.is_bookmarked("Gamma"));
    }

    #[test]
    fn toggle_bookmark_targets_detail_title() {
        let mut app = test_app();
        app.open_detail("Arbitrary".to_string());
        let (title, bookmarked) = app.toggle_bookmark().unwrap();
        assert_eq!(title, "Arbitrary");
        assert!(bookmarked);
        let (_, bookmarked) = app.toggle_bookmark().unwrap();
        assert!(!bookmarked);
    }

    #[test]
    fn toggle_theme_rebuilds_palette() {
        let mut app = test_app();
        let light = app.palette.clone();
        let name = app.toggle_theme();
        assert_eq!(name, "Dark");
        assert_ne!(app.palette, light);
        app.toggle_theme();
        assert_eq!(app.palette, light);
    }

    #[test]
    fn entering_detail_resets_scroll() {
        let mut app = test_app();
        app.open_selected();
        app.scroll_down(5);
        app.back();
        app.open_selected();
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn scroll_saturates_at_zero() {
        let mut app = test_app();
        app.scroll_up(1);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn clamp_detail_scroll_limits_to_content() {
        let mut app = test_app();
        app.open_selected();
        app.detail_viewport_width = 80;
        app.detail_visible_lines = 10;
        app.scroll_down(1000);
        app.clamp_detail_scroll();
        // Short body + 3 header lines all fit in 10 visible lines
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn detail_content_lines_counts_wrapped_body() {
        let mut app = App::new(
            Catalog::from_toml_str(
                r#"
[[article]]
title = "Wide"
published = "2025-03-14"
body = "aaaaaaaaaaaaaaaaaaaa"
"#,
            )
            .unwrap(),
            ThemeVariant::default(),
        );
        app.open_detail("Wide".to_string());
        app.detail_viewport_width = 10;
        // 20-char line wraps to 2 display lines, plus 3 header lines
        assert_eq!(app.detail_content_lines(), 5);
    }

    // Status message expiry with time control
    #[tokio::test]
    async fn status_expires_after_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some()); // still present at 2s

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none()); // expired after 3s
    }

    #[tokio::test]
    async fn status_not_expired_before_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test");

        time::advance(Duration::from_millis(2999)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some());
    }
}
