//! Document shell and root application component.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders [`shell`] once per request with the theme it resolved
//! from the session cookie. The shell is never hydrated; only the body
//! (`App`) is. The root class therefore comes straight from the server, or
//! from the pre-paint step when the server had nothing.

use leptos::prelude::*;

use crate::components::site_header::{APP_TITLE, SiteHeader};
use crate::pages::{Page, page_view};
use crate::state::theme::ThemeState;
use crate::theme::{Theme, color_scheme_hint};
use crate::util::pre_paint::{self, MARKER_ID as PRE_PAINT_MARKER_ID};

/// Stylesheet served from the site root.
pub const STYLESHEET_HREF: &str = "/pkg/todo-ui.css";

/// HTML shell rendered on the server.
///
/// With a resolved theme the root element carries its class. Without one it
/// carries none and the pre-paint marker runs first in `<head>`. Hydration
/// scripts are emitted for interactive pages once `options` names a bundle.
pub fn shell(ssr_theme: Option<Theme>, page: Page, options: LeptosOptions) -> impl IntoView {
    let html_class = ssr_theme.map_or("", Theme::as_str);
    let color_scheme = color_scheme_hint(ssr_theme);

    let pre_paint = ssr_theme.is_none().then(|| {
        let source = pre_paint::script();
        view! { <script id=PRE_PAINT_MARKER_ID inner_html=source></script> }
    });

    let hydration = (page.is_interactive() && !options.output_name.is_empty())
        .then(|| view! { <HydrationScripts options/> });

    view! {
        <!DOCTYPE html>
        <html lang="en" class=html_class>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="color-scheme" content=color_scheme/>
                <title>{APP_TITLE}</title>
                {pre_paint}
                <link rel="stylesheet" href=STYLESHEET_HREF/>
                {hydration}
            </head>
            <body>
                <App ssr_theme=ssr_theme page=page/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context, then renders the header and the page. When
/// the server rendered unresolved, the hydrated client adopts whatever the
/// pre-paint step applied once hydration is done.
#[component]
pub fn App(ssr_theme: Option<Theme>, page: Page) -> impl IntoView {
    let theme = ThemeState::provide(ssr_theme);

    #[cfg(feature = "hydrate")]
    if !theme.ssr_resolved() {
        Effect::new(move |_| {
            if let Some(local) = crate::util::dark_mode::read_document_theme() {
                theme.adopt(local);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = theme;

    view! {
        <SiteHeader/>
        {page_view(page)}
    }
}

/// Render a full document to a string inside a fresh reactive owner.
///
/// The owner is the per-request boundary for the theme context.
#[cfg(feature = "ssr")]
#[must_use]
pub fn render_document(ssr_theme: Option<Theme>, page: Page, options: LeptosOptions) -> String {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| shell(ssr_theme, page, options).to_html())
}
