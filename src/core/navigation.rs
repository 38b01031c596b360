//! Navigation state machine: current path, listing fetches, breadcrumbs,
//! and browser-history synchronization.
//!
//! The controller owns the client's notion of "where am I". A navigation
//! normalizes the requested path, flips the loading flag synchronously,
//! fetches the listing, and only commits `current_path` (and pushes a
//! history entry) once the fetch succeeds. A failed fetch becomes an inline
//! error render and leaves the committed state untouched.
//!
//! Concurrent navigations are allowed to race; the later response to
//! resolve wins the final render because the listing is assigned atomically.

use leptos::prelude::*;

use crate::config::{API_LIST_BASE, RESERVED_PATH_PREFIXES};
use crate::models::FileEntry;
use crate::utils::{dom, fetch};

// =============================================================================
// Path helpers
// =============================================================================

/// Normalize a navigation path: backslashes become slashes and leading
/// slashes are stripped. The empty string denotes the storage root.
/// Segments are otherwise opaque.
pub fn normalize_path(raw: &str) -> String {
    raw.replace('\\', "/").trim_start_matches('/').to_string()
}

/// Listing endpoint for a normalized path.
pub fn listing_url(path: &str) -> String {
    if path.is_empty() {
        API_LIST_BASE.to_string()
    } else {
        format!("{API_LIST_BASE}/{path}")
    }
}

/// Browser location for a normalized path (root maps to `/`).
pub fn location_url(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{path}")
    }
}

/// Whether a normalized path belongs to a non-navigational server route
/// (API or raw-file endpoints) rather than the client-side explorer.
pub fn is_reserved_path(path: &str) -> bool {
    RESERVED_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

// =============================================================================
// Breadcrumbs
// =============================================================================

/// One breadcrumb: a label and the normalized path it navigates to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: String,
}

/// Derive the breadcrumb trail for a normalized path.
///
/// The root crumb always targets the empty path; each following crumb
/// targets the slash-joined prefix of segments up to and including itself.
/// Empty segments from malformed paths are skipped.
pub fn breadcrumbs(path: &str, root_label: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: root_label.to_string(),
        target: String::new(),
    }];

    let mut accumulated = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !accumulated.is_empty() {
            accumulated.push('/');
        }
        accumulated.push_str(segment);
        crumbs.push(Crumb {
            label: segment.to_string(),
            target: accumulated.clone(),
        });
    }

    crumbs
}

// =============================================================================
// NavigationController
// =============================================================================

/// Owns navigation state and issues listing fetches.
///
/// `Copy` because all fields are Leptos signals. The controller is created
/// once by the application root and shared through context; all writes
/// happen from the single-threaded event context.
#[derive(Clone, Copy)]
pub struct NavigationController {
    /// Committed path, slash-normalized, empty = root.
    pub current_path: RwSignal<String>,
    /// Last successfully fetched listing, in server order.
    pub entries: RwSignal<Vec<FileEntry>>,
    /// A listing fetch is in flight.
    pub loading: RwSignal<bool>,
    /// Inline error from the most recent failed navigation.
    pub error: RwSignal<Option<String>>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current_path: RwSignal::new(String::new()),
            entries: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Navigate to a directory path.
    ///
    /// With `update_history`, a successful navigation pushes a new browser
    /// history entry; popstate restoration and initial load pass `false`
    /// so back/forward cycles never grow the history.
    pub async fn navigate(&self, path: &str, update_history: bool) {
        let path = normalize_path(path);

        // Loading state flips before the first suspension point.
        self.loading.set(true);
        self.error.set(None);

        match fetch::fetch_json::<Vec<FileEntry>>(&listing_url(&path)).await {
            Ok(entries) => {
                self.current_path.set(path.clone());
                self.entries.set(entries);
                if update_history {
                    push_history_entry(&path);
                }
            }
            Err(err) => {
                // No partial commit: path, listing, and history stay as-is.
                self.error.set(Some(err.to_string()));
            }
        }

        self.loading.set(false);
    }

    /// Breadcrumb trail for the committed path.
    pub fn breadcrumbs(&self, root_label: &str) -> Vec<Crumb> {
        breadcrumbs(&self.current_path.get(), root_label)
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Browser history integration
// =============================================================================

/// Push a history entry for a committed path. The path itself is stored as
/// the history state so popstate can restore it without re-parsing the URL.
fn push_history_entry(path: &str) {
    if let Some(window) = dom::window()
        && let Ok(history) = window.history()
    {
        let state = wasm_bindgen::JsValue::from_str(path);
        let _ = history.push_state_with_url(&state, "", Some(&location_url(path)));
    }
}

/// The path to navigate to on initial page load, parsed from the current
/// location. `None` when the location falls under a reserved server route.
pub fn startup_path() -> Option<String> {
    let path = normalize_path(&dom::location_pathname());
    if is_reserved_path(&path) {
        return None;
    }
    Some(path)
}

/// Install the popstate listener that replays back/forward navigation
/// through the controller without pushing duplicate history entries.
#[cfg(target_arch = "wasm32")]
pub fn install_history_listener(nav: NavigationController) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let closure = Closure::wrap(Box::new(move |event: web_sys::PopStateEvent| {
        let restored = event.state().as_string().unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            nav.navigate(&restored, false).await;
        });
    }) as Box<dyn Fn(web_sys::PopStateEvent)>);

    if let Some(window) = dom::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // Listener lives for the lifetime of the app.
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_leading_slashes_and_backslashes() {
        assert_eq!(normalize_path("/docs/readme.md"), "docs/readme.md");
        assert_eq!(normalize_path("///a/b"), "a/b");
        assert_eq!(normalize_path("a\\b\\c"), "a/b/c");
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
    }

    #[test]
    fn listing_and_location_urls() {
        assert_eq!(listing_url(""), "/api/list");
        assert_eq!(listing_url("a/b"), "/api/list/a/b");
        assert_eq!(location_url(""), "/");
        assert_eq!(location_url("a/b"), "/a/b");
    }

    #[test]
    fn reserved_prefixes_skip_client_navigation() {
        assert!(is_reserved_path("api/list/docs"));
        assert!(is_reserved_path("files/photo.png"));
        assert!(!is_reserved_path("docs/api-notes"));
        assert!(!is_reserved_path(""));
    }

    #[test]
    fn breadcrumbs_for_nested_path() {
        let crumbs = breadcrumbs("a/b/c", "storage");
        assert_eq!(
            crumbs,
            vec![
                Crumb {
                    label: "storage".to_string(),
                    target: String::new()
                },
                Crumb {
                    label: "a".to_string(),
                    target: "a".to_string()
                },
                Crumb {
                    label: "b".to_string(),
                    target: "a/b".to_string()
                },
                Crumb {
                    label: "c".to_string(),
                    target: "a/b/c".to_string()
                },
            ]
        );
    }

    #[test]
    fn breadcrumbs_for_root_is_just_the_root_crumb() {
        let crumbs = breadcrumbs("", "storage");
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].target, "");
    }

    #[test]
    fn breadcrumbs_skip_empty_segments() {
        let crumbs = breadcrumbs("a//b/", "storage");
        let targets: Vec<&str> = crumbs.iter().map(|c| c.target.as_str()).collect();
        assert_eq!(targets, vec!["", "a", "a/b"]);
    }
}
