//! Landing page.

use leptos::prelude::*;

use crate::state::theme::use_theme;

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let status = move || match theme.current() {
        Some(current) => format!("Current theme: {current}."),
        None => "Following your system theme.".to_owned(),
    };

    view! {
        <main class="page page--home">
            <p class="page__status">{status}</p>
            <p>"Use the button in the header to switch between light and dark."</p>
        </main>
    }
}
