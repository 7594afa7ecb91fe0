//! # todo-ui
//!
//! Leptos frontend for the Todo App shell: theme type, per-render theme
//! context, the light/dark toggle, the document layout with its error
//! fallback, and the pre-paint step that keeps the first paint on the right
//! theme.
//!
//! The `ssr` feature exposes [`app::render_document`] for the server crate.
//! The `hydrate` feature builds the browser bundle whose entry point is
//! [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::pages::Page;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let ssr_theme = util::dark_mode::read_server_theme();
    leptos::mount::hydrate_body(move || {
        view! { <App ssr_theme=ssr_theme page=Page::Home/> }
    });
}
