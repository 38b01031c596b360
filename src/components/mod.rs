//! UI components built with Leptos.
//!
//! - [`explorer`] - directory listing, breadcrumbs, and header
//! - [`icons`] - centralized icon glyph definitions (change theme here)

pub mod explorer;
pub mod icons;

pub use explorer::Explorer;
