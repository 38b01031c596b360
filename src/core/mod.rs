//! Core logic: theme resolution, icon resolution, and navigation.
//!
//! Everything here is UI-framework-light: the modules own state and pure
//! functions, and the components under [`crate::components`] only render
//! what these modules decide.

pub mod error;
pub mod icons;
pub mod navigation;
pub mod styles;
pub mod theme;

pub use icons::IconRegistry;
pub use navigation::NavigationController;
pub use styles::{ThemeStyleSet, style_set_for};
pub use theme::{ThemeName, ThemePreference};
