//! Color theme model: theme names, palettes, and the persisted preference.
//!
//! The theme name is a closed enumeration; anything read from persistent
//! storage that is not exactly `"light"` or `"dark"` falls back to the
//! default. The fallback is total and silent toward the caller, but carries
//! an explicit reason so the load path stays testable.

use leptos::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::utils::dom;

// =============================================================================
// Theme Names
// =============================================================================

/// Closed set of theme names recognized by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// Canonical string form, used for persistence and the document attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Outcome of parsing a persisted theme value.
///
/// Parsing is total: unrecognized input yields [`ParsedTheme::Fallback`]
/// carrying the rejected raw value, and the resolved theme is always the
/// default in that case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedTheme {
    /// The value was exactly one of the recognized names.
    Recognized(ThemeName),
    /// The value was absent or unrecognized; the default applies.
    Fallback { rejected: Option<String> },
}

impl ParsedTheme {
    /// The theme to use, after fallback resolution.
    pub fn theme(&self) -> ThemeName {
        match self {
            Self::Recognized(name) => *name,
            Self::Fallback { .. } => ThemeName::default(),
        }
    }
}

/// Parse a raw persisted value into a theme name, falling back to the
/// default for anything outside the closed set.
pub fn parse_theme(raw: Option<&str>) -> ParsedTheme {
    match raw {
        Some("light") => ParsedTheme::Recognized(ThemeName::Light),
        Some("dark") => ParsedTheme::Recognized(ThemeName::Dark),
        other => ParsedTheme::Fallback {
            rejected: other.map(str::to_string),
        },
    }
}

// =============================================================================
// Palettes
// =============================================================================

/// Immutable set of color-role values backing one theme.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub base: &'static str,
    pub mantle: &'static str,
    pub surface0: &'static str,
    pub surface1: &'static str,
    pub surface2: &'static str,
    pub overlay0: &'static str,
    pub overlay1: &'static str,
    pub text: &'static str,
    pub subtext0: &'static str,
    pub subtext1: &'static str,
    pub blue: &'static str,
    pub red: &'static str,
}

/// Light palette.
pub const LATTE: Palette = Palette {
    base: "#eff1f5",
    mantle: "#e6e9ef",
    surface0: "#ccd0da",
    surface1: "#bcc0cc",
    surface2: "#acb0be",
    overlay0: "#9ca0b0",
    overlay1: "#8c8fa1",
    text: "#4c4f69",
    subtext0: "#6c6f85",
    subtext1: "#5c5f77",
    blue: "#1e66f5",
    red: "#d20f39",
};

/// Dark palette.
pub const MACCHIATO: Palette = Palette {
    base: "#24273a",
    mantle: "#1e2030",
    surface0: "#363a4f",
    surface1: "#494d64",
    surface2: "#5b6078",
    overlay0: "#6e738d",
    overlay1: "#8087a2",
    text: "#cad3f5",
    subtext0: "#a5adcb",
    subtext1: "#b8c0e0",
    blue: "#8aadf4",
    red: "#ed8796",
};

/// Palette for a theme name. Pure and total.
pub fn colors_for(theme: ThemeName) -> &'static Palette {
    match theme {
        ThemeName::Light => &LATTE,
        ThemeName::Dark => &MACCHIATO,
    }
}

// =============================================================================
// ThemePreference
// =============================================================================

/// The persisted theme setting, owned by the application root and injected
/// into components through [`crate::app::AppContext`].
///
/// Changing the theme persists the new value and publishes it through the
/// reactive signal. The `data-theme` document attribute is deliberately not
/// written here; the application shell mirrors the signal onto the document
/// in a presentation-layer effect after the state commits.
#[derive(Clone, Copy)]
pub struct ThemePreference {
    active: RwSignal<ThemeName>,
}

impl ThemePreference {
    /// Load the preference from localStorage, coercing unrecognized values
    /// to the default. This is the only validation boundary; writes take
    /// the value as given.
    pub fn load() -> Self {
        let stored = dom::local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
        let parsed = parse_theme(stored.as_deref());
        if let ParsedTheme::Fallback {
            rejected: Some(raw),
        } = &parsed
        {
            leptos::logging::log!("ignoring unrecognized stored theme {raw:?}");
        }
        Self {
            active: RwSignal::new(parsed.theme()),
        }
    }

    /// Reactive handle to the active theme.
    pub fn signal(&self) -> RwSignal<ThemeName> {
        self.active
    }

    /// Set the active theme: persist first, then publish.
    pub fn set(&self, theme: ThemeName) {
        if let Some(storage) = dom::local_storage() {
            // Persistence is best-effort; the in-memory state still changes.
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
        self.active.set(theme);
    }

    /// Flip dark and light.
    pub fn toggle(&self) {
        self.set(self.active.get_untracked().toggled());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn toggle_twice_persists_each_change() {
        let prefs = ThemePreference::load();
        let initial = prefs.signal().get_untracked();
        let storage = dom::local_storage().unwrap();

        prefs.toggle();
        assert_eq!(
            storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some(initial.toggled().as_str())
        );

        prefs.toggle();
        assert_eq!(prefs.signal().get_untracked(), initial);
        assert_eq!(
            storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some(initial.as_str())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_closed_set() {
        assert_eq!(
            parse_theme(Some("light")),
            ParsedTheme::Recognized(ThemeName::Light)
        );
        assert_eq!(
            parse_theme(Some("dark")),
            ParsedTheme::Recognized(ThemeName::Dark)
        );
    }

    #[test]
    fn parse_falls_back_on_unknown_value() {
        let parsed = parse_theme(Some("purple"));
        assert_eq!(
            parsed,
            ParsedTheme::Fallback {
                rejected: Some("purple".to_string())
            }
        );
        assert_eq!(parsed.theme(), ThemeName::Light);
    }

    #[test]
    fn parse_falls_back_on_missing_value() {
        let parsed = parse_theme(None);
        assert_eq!(parsed, ParsedTheme::Fallback { rejected: None });
        assert_eq!(parsed.theme(), ThemeName::Light);
    }

    #[test]
    fn parse_is_case_and_whitespace_exact() {
        assert_eq!(parse_theme(Some("Dark")).theme(), ThemeName::Light);
        assert_eq!(parse_theme(Some(" light")).theme(), ThemeName::Light);
    }

    #[test]
    fn toggled_twice_round_trips() {
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Light.toggled().toggled(), ThemeName::Light);
    }

    #[test]
    fn palettes_differ_per_role() {
        assert_ne!(colors_for(ThemeName::Light), colors_for(ThemeName::Dark));
        assert_eq!(colors_for(ThemeName::Light).base, "#eff1f5");
        assert_eq!(colors_for(ThemeName::Dark).base, "#24273a");
    }
}
