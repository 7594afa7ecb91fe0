//! Top bar with the app title and the theme toggle.

use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;

/// Fixed application title shown in the header and the document title.
pub const APP_TITLE: &str = "Todo App";

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1 class="site-header__title">{APP_TITLE}</h1>
            <div class="site-header__actions">
                <ThemeToggle/>
            </div>
        </header>
    }
}
