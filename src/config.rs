//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The icon mapping table is embedded at compile time using `include_str!`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "filedeck";

/// Display label for the storage root breadcrumb.
pub const ROOT_LABEL: &str = "storage";

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Base path of the directory-listing endpoint.
pub const API_LIST_BASE: &str = "/api/list";

/// Base path of the raw-file endpoint.
pub const FILES_BASE: &str = "/files";

/// Location prefixes owned by the server, never by client-side navigation.
pub const RESERVED_PATH_PREFIXES: &[&str] = &["api/", "files/"];

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Theme Configuration
// =============================================================================

/// localStorage key for the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document root attribute mirroring the active theme, consumed by CSS.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// =============================================================================
// Icon Configuration
// =============================================================================

/// File-to-icon mapping table (loaded at compile time).
pub const ICON_MAPPINGS_JSON: &str = include_str!("../assets/icon-mappings.json");

/// Icon glyph theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon glyph theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
