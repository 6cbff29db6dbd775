//! In-memory session state: theme and bookmarks.
//!
//! One `SessionState` exists per running instance, owned by `App` and passed
//! into the view layer explicitly — there are no ambient globals. Nothing
//! here persists: every process start yields dark mode off and an empty
//! bookmark set.

use crate::theme::ThemeVariant;
use std::collections::HashSet;

/// Theme and bookmark state for one application session.
///
/// Bookmarks are keyed by article title. Titles are accepted without a
/// catalog existence check; callers that want validation must do it
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    theme: ThemeVariant,
    bookmarks: HashSet<String>,
}

impl SessionState {
    /// Fresh session with the given starting theme and no bookmarks.
    pub fn new(theme: ThemeVariant) -> Self {
        Self {
            theme,
            bookmarks: HashSet::new(),
        }
    }

    /// Current theme variant.
    pub fn theme(&self) -> ThemeVariant {
        self.theme
    }

    /// Whether dark mode is active.
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the theme. Returns the new variant. Total, never fails.
    pub fn toggle_theme(&mut self) -> ThemeVariant {
        self.theme = self.theme.next();
        self.theme
    }

    /// Toggle the bookmark for a title: insert if absent, remove if present.
    ///
    /// Returns true if the title is bookmarked after the call. Applying the
    /// toggle twice is a no-op.
    pub fn toggle_bookmark(&mut self, title: &str) -> bool {
        if self.bookmarks.remove(title) {
            tracing::debug!(title, "Removed bookmark");
            false
        } else {
            self.bookmarks.insert(title.to_string());
            tracing::debug!(title, "Added bookmark");
            true
        }
    }

    /// Pure lookup, no side effects.
    pub fn is_bookmarked(&self, title: &str) -> bool {
        self.bookmarks.contains(title)
    }

    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
