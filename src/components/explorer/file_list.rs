//! File list component for the explorer view.
//!
//! Renders the current listing in the order the backend returned it, plus
//! the loading, error, and empty states. Activating a directory navigates
//! the controller; activating a file navigates the browser straight to the
//! raw-file endpoint without touching client state.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::StyleContext;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::FILES_BASE;
use crate::core::IconRegistry;
use crate::models::FileEntry;
use crate::utils::dom;
use crate::utils::format::{format_modified, format_size};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Current time in epoch seconds, from the browser clock.
fn now_epoch_seconds() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let styles = use_context::<StyleContext>().expect("StyleContext must be provided").0;

    let nav = ctx.nav;

    view! {
        <div class=css::list role="list" aria-label="Directory listing">
            {move || {
                if nav.loading.get() {
                    return view! {
                        <div class=css::stateLine style=move || styles.get().styles.loading>
                            "Loading..."
                        </div>
                    }
                    .into_any();
                }

                if let Some(message) = nav.error.get() {
                    return view! {
                        <div
                            class=format!("{} {}", css::stateLine, css::errorLine)
                            style=move || styles.get().styles.error
                        >
                            {format!("Error loading directory: {}", message)}
                        </div>
                    }
                    .into_any();
                }

                let entries = nav.entries.get();
                if entries.is_empty() {
                    // Exactly one empty-state element, never a bare container.
                    return view! {
                        <div class=css::stateLine style=move || styles.get().styles.muted>
                            "This folder is empty"
                        </div>
                    }
                    .into_any();
                }

                let now = now_epoch_seconds();
                entries
                    .into_iter()
                    .map(|entry| view! { <FileRow entry=entry now=now /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn FileRow(entry: FileEntry, now: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let styles = use_context::<StyleContext>().expect("StyleContext must be provided").0;

    let nav = ctx.nav;
    let is_dir = entry.is_dir;
    let path = entry.path.clone();

    let icon = ic::glyph_for(IconRegistry::global().resolve(&entry.name, is_dir));
    let size = if is_dir {
        "-".to_string()
    } else {
        format_size(entry.size)
    };
    let date = format_modified(entry.modified, now);

    let suffix = if is_dir { "/" } else { "" };
    let display_name = format!("{}{}", entry.name, suffix);
    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    let name_style = move || {
        if is_dir {
            styles.get().styles.directory
        } else {
            styles.get().styles.text
        }
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            let target = path.clone();
            wasm_bindgen_futures::spawn_local(async move {
                nav.navigate(&target, true).await;
            });
        } else {
            dom::redirect_to(&format!("{}/{}", FILES_BASE, path));
        }
    };

    view! {
        <div
            class=move || format!("{} {}", css::item, styles.get().classes.hover)
            role="listitem"
            tabindex="0"
            aria-label=aria_label
            on:click=handle_click
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name style=name_style>{display_name}</span>
            <span class=css::size style=move || styles.get().styles.muted>{size}</span>
            <span class=css::date style=move || styles.get().styles.muted>{date}</span>
        </div>
    }
}
