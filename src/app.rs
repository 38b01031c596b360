//! Root application module.
//!
//! Contains the main App component and the AppContext that injects the
//! navigation controller and theme preference into the component tree.

use leptos::prelude::*;

use crate::components::Explorer;
use crate::config::THEME_ATTRIBUTE;
#[cfg(target_arch = "wasm32")]
use crate::core::navigation;
use crate::core::{NavigationController, ThemePreference};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Created once by [`App`] and provided at the root of the component tree;
/// children access it with `use_context::<AppContext>()`. Holding explicit
/// instances here (instead of module-level globals) keeps single-writer
/// semantics for the theme and navigation state.
///
/// # Note
///
/// This struct is `Copy` because all fields are backed by Leptos signals,
/// which are cheap handles to the underlying reactive state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation state machine (current path, listing, loading, error).
    pub nav: NavigationController,

    /// Persisted theme preference.
    pub theme: ThemePreference,
}

impl AppContext {
    /// Create the context, loading the persisted theme preference.
    pub fn new() -> Self {
        Self {
            nav: NavigationController::new(),
            theme: ThemePreference::load(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// Creates and provides the global AppContext, mirrors the active theme
/// onto the document after each state commit, installs the popstate
/// listener, and issues the initial navigation from the current location.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Presentation-layer effect: the theme state machine itself never
    // touches the document; the shell mirrors it here after commits.
    let theme = ctx.theme.signal();
    Effect::new(move |_| {
        dom::apply_theme_attribute(THEME_ATTRIBUTE, theme.get().as_str());
    });

    #[cfg(target_arch = "wasm32")]
    {
        navigation::install_history_listener(ctx.nav);

        // Initial load: restore the location path without pushing a
        // duplicate history entry. Reserved server routes are left alone.
        if let Some(path) = navigation::startup_path() {
            wasm_bindgen_futures::spawn_local(async move {
                ctx.nav.navigate(&path, false).await;
            });
        }
    }

    view! { <Explorer /> }
}
