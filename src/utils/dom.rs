//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Everything here is
//! best-effort: a missing window or storage degrades to `None`/no-op, never
//! a panic.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Current location pathname (e.g. `/docs/guides`).
pub fn location_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Navigate the browser directly to a URL (full page load, no client state).
pub fn redirect_to(url: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_href(url);
    }
}

/// Mirror the active theme onto the document root element so the CSS layer
/// can select on `[data-theme="..."]`.
pub fn apply_theme_attribute(attribute: &str, theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        let _ = root.set_attribute(attribute, theme);
    }
}
