//! Breadcrumb trail component.
//!
//! Displays the committed path as clickable prefix segments. The root crumb
//! always targets the storage root (empty path); every other crumb targets
//! the slash-joined prefix up to and including itself.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::StyleContext;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ROOT_LABEL;
use crate::core::navigation::{Crumb, location_url};

stylance::import_crate_style!(css, "src/components/explorer/breadcrumb.module.css");

/// Breadcrumb trail above the directory listing.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                ctx.nav
                    .breadcrumbs(ROOT_LABEL)
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let with_separator = idx > 0;
                        view! { <CrumbLink crumb=crumb with_separator=with_separator /> }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// One clickable crumb, preceded by a separator for all but the root.
#[component]
fn CrumbLink(crumb: Crumb, with_separator: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let styles = use_context::<StyleContext>().expect("StyleContext must be provided").0;

    let nav = ctx.nav;
    let is_root = crumb.target.is_empty();
    let href = location_url(&crumb.target);
    let target = crumb.target.clone();

    let handle_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let target = target.clone();
        wasm_bindgen_futures::spawn_local(async move {
            nav.navigate(&target, true).await;
        });
    };

    view! {
        {with_separator.then(|| view! {
            <span class=css::separator style=move || styles.get().styles.separator aria-hidden="true">
                <Icon icon=ic::CHEVRON_RIGHT />
            </span>
        })}
        <a
            class=css::crumb
            style=move || styles.get().styles.link
            href=href
            on:click=handle_click
        >
            {is_root.then(|| view! {
                <span class=css::crumbIcon aria-hidden="true"><Icon icon=ic::HOME /></span>
            })}
            {crumb.label}
        </a>
    }
}
