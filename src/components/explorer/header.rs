//! Explorer header component.
//!
//! Shows the application title and the theme toggle. The toggle names the
//! theme it switches *to*: sun/"Light" while dark is active, moon/"Dark"
//! otherwise.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::StyleContext;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::ThemeName;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with title and theme toggle.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let styles = use_context::<StyleContext>().expect("StyleContext must be provided").0;

    let theme = ctx.theme.signal();
    let is_dark = Signal::derive(move || theme.get() == ThemeName::Dark);

    view! {
        <header class=css::header>
            <h1
                class=move || format!("{} {}", css::title, styles.get().classes.heading)
                style=move || styles.get().styles.heading
            >
                {APP_NAME}
            </h1>

            <button
                class=move || format!("{} {}", css::toggle, styles.get().classes.hover)
                style=move || styles.get().styles.button
                aria-label="Toggle color theme"
                on:click=move |_| ctx.theme.toggle()
            >
                <span class=css::toggleIcon aria-hidden="true">
                    {move || {
                        let icon = if is_dark.get() { ic::SUN } else { ic::MOON };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
                <span class=css::toggleLabel>
                    {move || if is_dark.get() { "Light" } else { "Dark" }}
                </span>
            </button>
        </header>
    }
}
