//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! `ThemeVariant` selects between the Light and Dark palettes; the session's
//! dark-mode flag is exactly "which variant is active".

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants. A fresh session starts in `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    /// Parse a variant name from config or CLI (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Light => ColorPalette::light(),
            Self::Dark => ColorPalette::dark(),
        }
    }

    /// Toggle to the other variant: Light → Dark → Light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Whether this variant is the dark mode.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // -- Headline list --
    pub headline_normal: Style,
    pub headline_selected: Style,
    pub headline_date: Style,
    pub headline_bookmark: Style,

    // -- Detail view --
    pub detail_title: Style,
    pub detail_date: Style,
    pub detail_body: Style,
    pub detail_fallback: Style,

    // -- Chrome --
    pub top_bar: Style,
    pub top_bar_title: Style,
    pub bookmark_active: Style,
    pub bookmark_inactive: Style,
    pub theme_switch: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub help_border: Style,
    pub help_heading: Style,
}

impl ColorPalette {
    /// Dark palette — terminal default background, bright accents.
    fn dark() -> Self {
        Self {
            headline_normal: Style::default(),
            headline_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            headline_date: Style::default().fg(Color::DarkGray),
            headline_bookmark: Style::default().fg(Color::Yellow),

            detail_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            detail_date: Style::default().fg(Color::DarkGray),
            detail_body: Style::default(),
            detail_fallback: Style::default().fg(Color::Yellow),

            top_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            top_bar_title: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            bookmark_active: Style::default().bg(Color::DarkGray).fg(Color::Yellow),
            bookmark_inactive: Style::default().bg(Color::DarkGray).fg(Color::Gray),
            theme_switch: Style::default().bg(Color::DarkGray).fg(Color::Cyan),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default().fg(Color::Gray),
            help_border: Style::default().fg(Color::Cyan),
            help_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            headline_normal: Style::default().fg(Color::Black),
            headline_selected: Style::default().bg(Color::Blue).fg(Color::White),
            headline_date: Style::default().fg(Color::DarkGray),
            headline_bookmark: Style::default().fg(Color::Magenta),

            detail_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_date: Style::default().fg(Color::DarkGray),
            detail_body: Style::default().fg(Color::Black),
            detail_fallback: Style::default().fg(Color::Magenta),

            top_bar: Style::default().bg(Color::White).fg(Color::Black),
            top_bar_title: Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            bookmark_active: Style::default().bg(Color::White).fg(Color::Magenta),
            bookmark_inactive: Style::default().bg(Color::White).fg(Color::DarkGray),
            theme_switch: Style::default().bg(Color::White).fg(Color::Blue),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            help_border: Style::default().fg(Color::Blue),
            help_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
