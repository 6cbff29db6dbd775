//! Keybinding registry — maps actions to key events with config overrides.
//!
//! Dispatch is data-driven rather than hardcoded match arms, so users can
//! rebind actions via the `[keybindings]` table in config.toml.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    Select,
    Back,
    ToggleBookmark,
    ToggleTheme,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Navigate down",
            Self::NavUp => "Navigate up",
            Self::Select => "Open selected headline",
            Self::Back => "Back to feed",
            Self::ToggleBookmark => "Toggle bookmark",
            Self::ToggleTheme => "Toggle light/dark theme",
            Self::ScrollDown => "Scroll down one line",
            Self::ScrollUp => "Scroll up one line",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context — determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Feed,
    Detail,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "b"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Backspace", "Space"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.len() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    // Function keys
    if s.starts_with('F') || s.starts_with('f') {
        if let Ok(n) = s[1..].parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
        }
    }

    // Single character
    if s.len() == 1 {
        let c = s.chars().next()?;
        return Some(KeySpec::plain(KeyCode::Char(c)));
    }

    None
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// Lookup is O(1) via HashMap. The same key can map to different actions in
/// different contexts (j scrolls in the detail view but navigates the feed).
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    /// Register a single binding.
    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        // === Global ===
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('q')),
            Action::Quit,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('b')),
            Action::ToggleBookmark,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('t')),
            Action::ToggleTheme,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('?')),
            Action::ShowHelp,
        );

        // === Feed view ===
        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('j')),
            Action::NavDown,
        );
        self.bind(Context::Feed, KeySpec::plain(KeyCode::Down), Action::NavDown);
        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('k')),
            Action::NavUp,
        );
        self.bind(Context::Feed, KeySpec::plain(KeyCode::Up), Action::NavUp);
        self.bind(Context::Feed, KeySpec::plain(KeyCode::Enter), Action::Select);
        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('l')),
            Action::Select,
        );

        // === Detail view ===
        self.bind(Context::Detail, KeySpec::plain(KeyCode::Esc), Action::Back);
        self.bind(
            Context::Detail,
            KeySpec::plain(KeyCode::Char('h')),
            Action::Back,
        );
        self.bind(
            Context::Detail,
            KeySpec::plain(KeyCode::Backspace),
            Action::Back,
        );
        self.bind(
            Context::Detail,
            KeySpec::plain(KeyCode::Char('j')),
            Action::ScrollDown,
        );
        self.bind(
            Context::Detail,
            KeySpec::plain(KeyCode::Down),
            Action::ScrollDown,
        );
        self.bind(
            Context::Detail,
            KeySpec::plain(KeyCode::Char('k')),
            Action::ScrollUp,
        );
        self.bind(
            Context::Detail,
            KeySpec::plain(KeyCode::Up),
            Action::ScrollUp,
        );
        self.bind(Context::Detail, KeySpec::ctrl('d'), Action::PageDown);
        self.bind(Context::Detail, KeySpec::ctrl('u'), Action::PageUp);
    }

    /// Apply user overrides from the config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "toggle_bookmark").
    /// Values are key strings (e.g., "x", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or
    /// unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let action = match parse_action_name(action_name) {
                Some(a) => a,
                None => {
                    warnings.push(format!("Unknown action '{}', ignoring", action_name));
                    continue;
                }
            };

            let key = match parse_key_string(key_str) {
                Some(k) => k,
                None => {
                    warnings.push(format!(
                        "Cannot parse key '{}' for action '{}', ignoring",
                        key_str, action_name
                    ));
                    continue;
                }
            };

            // Rebind in the same contexts the action was bound in.
            let contexts_for_action: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts_for_action {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "navdown" | "down" => Some(Action::NavDown),
        "nav_up" | "navup" | "up" => Some(Action::NavUp),
        "select" | "enter" | "open" => Some(Action::Select),
        "back" => Some(Action::Back),
        "toggle_bookmark" | "togglebookmark" | "bookmark" => Some(Action::ToggleBookmark),
        "toggle_theme" | "toggletheme" | "theme" => Some(Action::ToggleTheme),
        "scroll_down" | "scrolldown" => Some(Action::ScrollDown),
        "scroll_up" | "scrollup" => Some(Action::ScrollUp),
        "page_down" | "pagedown" => Some(Action::PageDown),
        "page_up" | "pageup" => Some(Action::PageUp),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_dispatch() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Feed),
            Some(Action::Quit)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Enter, KeyModifiers::NONE, Context::Feed),
            Some(Action::Select)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Detail),
            Some(Action::Back)
        );
    }

    #[test]
    fn same_key_differs_by_context() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('j'), KeyModifiers::NONE, Context::Feed),
            Some(Action::NavDown)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('j'), KeyModifiers::NONE, Context::Detail),
            Some(Action::ScrollDown)
        );
    }

    #[test]
    fn global_fallback_applies_in_all_contexts() {
        let reg = KeybindingRegistry::new();
        for ctx in [Context::Feed, Context::Detail] {
            assert_eq!(
                reg.action_for_key(KeyCode::Char('t'), KeyModifiers::NONE, ctx),
                Some(Action::ToggleTheme)
            );
            assert_eq!(
                reg.action_for_key(KeyCode::Char('b'), KeyModifiers::NONE, ctx),
                Some(Action::ToggleBookmark)
            );
        }
    }

    #[test]
    fn unbound_key_returns_none() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('z'), KeyModifiers::NONE, Context::Feed),
            None
        );
    }

    #[test]
    fn override_rebinds_action_in_its_contexts() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("toggle_bookmark".to_string(), "x".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        assert_eq!(
            reg.action_for_key(KeyCode::Char('x'), KeyModifiers::NONE, Context::Detail),
            Some(Action::ToggleBookmark)
        );
        // Old binding removed
        assert_eq!(
            reg.action_for_key(KeyCode::Char('b'), KeyModifiers::NONE, Context::Detail),
            None
        );
    }

    #[test]
    fn override_with_unknown_action_warns() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("refresh_all".to_string(), "r".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Unknown action"));
    }

    #[test]
    fn override_with_bad_key_warns() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "NotAKey".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cannot parse key"));
        // Original binding untouched on failed override
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Feed),
            Some(Action::Quit)
        );
    }

    #[test]
    fn parse_key_string_formats() {
        assert_eq!(
            parse_key_string("Enter"),
            Some(KeySpec::plain(KeyCode::Enter))
        );
        assert_eq!(parse_key_string("Ctrl+d"), Some(KeySpec::ctrl('d')));
        assert_eq!(parse_key_string("F5"), Some(KeySpec::plain(KeyCode::F(5))));
        assert_eq!(
            parse_key_string(" q "),
            Some(KeySpec::plain(KeyCode::Char('q')))
        );
        assert_eq!(parse_key_string("F13"), None);
        assert_eq!(parse_key_string("Ctrl+shift+x"), None);
    }

    #[test]
    fn format_key_round_trips_common_keys() {
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Enter)), "Enter");
        assert_eq!(format_key(&KeySpec::ctrl('u')), "Ctrl+u");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Char(' '))), "Space");
    }

    #[test]
    fn all_bindings_enumerates_every_default() {
        let reg = KeybindingRegistry::new();
        let bindings = reg.all_bindings();
        assert!(bindings
            .iter()
            .any(|(_, _, action, _)| *action == Action::ToggleTheme));
        assert!(bindings
            .iter()
            .any(|(ctx, _, action, _)| *ctx == Context::Detail && *action == Action::PageDown));
    }
}
