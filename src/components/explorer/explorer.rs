//! Main explorer component.
//!
//! Lays out the header, breadcrumb trail, and directory listing, and owns
//! the memoized theme style set consumed by the child components.

use leptos::prelude::*;

use super::{Breadcrumb, FileList, Header};
use crate::app::AppContext;
use crate::core::{ThemeStyleSet, style_set_for};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Memoized theme style set, recomputed whenever the active theme changes
/// and shared with child components through context.
#[derive(Clone, Copy)]
pub struct StyleContext(pub Memo<ThemeStyleSet>);

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let theme = ctx.theme.signal();
    let styles = Memo::new(move |_| style_set_for(theme.get()));
    provide_context(StyleContext(styles));

    view! {
        <div
            class=move || format!("{} {}", css::explorer, styles.get().classes.body)
            style=move || styles.get().styles.body
        >
            <Header />
            <Breadcrumb />

            <main
                class=move || format!("{} {}", css::listPane, styles.get().classes.container)
                style=move || styles.get().styles.container
            >
                <FileList />
            </main>
        </div>
    }
}
