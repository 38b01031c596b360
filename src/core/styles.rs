//! Theme style resolution: class names and inline style strings.
//!
//! [`style_set_for`] is a pure function of the theme name. Several roles
//! intentionally pull surface tones from the *other* theme's palette
//! (hover highlight, error background) so contrast elements keep the same
//! relationship in both variants; the exact strings are load-bearing for
//! the CSS layer and must not be "simplified".

use super::theme::{ThemeName, colors_for, LATTE};

/// Fixed structural class names shared by both themes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeClasses {
    pub body: &'static str,
    pub heading: &'static str,
    pub container: &'static str,
    pub hover: &'static str,
}

/// Theme-dependent inline style strings, keyed by visual role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    pub body: String,
    pub heading: String,
    pub container: String,
    pub link: String,
    pub separator: String,
    /// Raw color value (not a declaration); applied as a hover background.
    pub hover: String,
    pub text: String,
    pub muted: String,
    pub directory: String,
    pub loading: String,
    pub error: String,
    pub divider: String,
    pub button: String,
}

/// Resolved bundle of classes and styles for one theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStyleSet {
    pub classes: ThemeClasses,
    pub styles: ThemeStyles,
}

/// Compute the style set for a theme. Pure; the UI memoizes the result and
/// recomputes it whenever the active theme changes.
pub fn style_set_for(theme: ThemeName) -> ThemeStyleSet {
    let colors = colors_for(theme);
    let dark = theme == ThemeName::Dark;

    ThemeStyleSet {
        classes: ThemeClasses {
            body: "min-h-screen p-8",
            heading: "text-lg font-bold",
            container: "rounded-lg border shadow-sm overflow-hidden",
            hover: "cursor-pointer transition-colors",
        },
        styles: ThemeStyles {
            body: format!("background-color: {}", colors.base),
            heading: format!("color: {}", colors.text),
            container: format!(
                "background-color: {}; border-color: {}",
                if dark { colors.surface0 } else { colors.mantle },
                if dark { colors.surface2 } else { colors.surface1 },
            ),
            link: format!("color: {} !important", colors.blue),
            separator: format!("color: {}", colors.overlay0),
            hover: if dark { colors.surface1 } else { LATTE.surface0 }.to_string(),
            text: format!("color: {}", colors.text),
            muted: format!("color: {}", colors.subtext0),
            directory: format!("color: {}; font-weight: 500", colors.blue),
            loading: format!("color: {}", colors.subtext0),
            error: format!(
                "background-color: {}; color: {}; border-color: {}",
                if dark { colors.surface1 } else { LATTE.surface0 },
                colors.red,
                if dark { colors.surface2 } else { LATTE.surface1 },
            ),
            divider: format!("background-color: {}", colors.surface1),
            button: format!("color: {}", colors.text),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_styles_are_exact() {
        let set = style_set_for(ThemeName::Light);
        assert_eq!(set.styles.body, "background-color: #eff1f5");
        assert_eq!(
            set.styles.container,
            "background-color: #e6e9ef; border-color: #bcc0cc"
        );
        assert_eq!(set.styles.link, "color: #1e66f5 !important");
        // Light hover pulls the light surface tone, as a raw color value.
        assert_eq!(set.styles.hover, "#ccd0da");
        assert_eq!(
            set.styles.error,
            "background-color: #ccd0da; color: #d20f39; border-color: #bcc0cc"
        );
    }

    #[test]
    fn dark_styles_use_dark_surfaces_for_contrast() {
        let set = style_set_for(ThemeName::Dark);
        assert_eq!(set.styles.body, "background-color: #24273a");
        assert_eq!(
            set.styles.container,
            "background-color: #363a4f; border-color: #5b6078"
        );
        assert_eq!(set.styles.hover, "#494d64");
        assert_eq!(
            set.styles.error,
            "background-color: #494d64; color: #ed8796; border-color: #5b6078"
        );
    }

    #[test]
    fn classes_are_theme_independent() {
        let light = style_set_for(ThemeName::Light);
        let dark = style_set_for(ThemeName::Dark);
        assert_eq!(light.classes, dark.classes);
        assert_eq!(light.classes.body, "min-h-screen p-8");
    }

    #[test]
    fn style_sets_differ_between_themes() {
        assert_ne!(
            style_set_for(ThemeName::Light),
            style_set_for(ThemeName::Dark)
        );
    }
}
