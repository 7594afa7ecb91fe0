//! Light/dark toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered as a plain form posting the opposite theme to the theme action,
//! so it works before (or without) hydration. Once hydrated, the submit is
//! intercepted and handled by [`ThemeState::set`], which flips the page
//! immediately and persists in the background.

use leptos::prelude::*;

use crate::net::types::THEME_ACTION_PATH;
use crate::state::theme::{ThemeState, use_theme};
use crate::theme::ToggleIcon;

/// Header control that requests the opposite of the current theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme: ThemeState = use_theme();
    let target = move || theme.toggle_target();
    let icon = move || ToggleIcon::for_target(target());

    view! {
        <form
            class="theme-toggle"
            method="post"
            action=THEME_ACTION_PATH
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                theme.toggle();
            }
        >
            <input type="hidden" name="theme" value=move || target().as_str()/>
            <button
                type="submit"
                class="btn btn--ghost btn--icon theme-toggle__button"
                title=move || icon().label()
                aria-label=move || icon().label()
            >
                {move || icon().glyph()}
            </button>
        </form>
    }
}
