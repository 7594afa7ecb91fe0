//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The server picks a [`Page`] per request and the layout renders it below
//! the header. Failures are pages too, so they keep the header and theme.

pub mod home;

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::error_fallback::{ErrorFallback, RenderFailure};
use home::HomePage;

/// Content rendered inside the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Failure(RenderFailure),
}

impl Page {
    /// Whether the page ships the hydration bundle.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Home)
    }
}

/// Render `page` as a view.
pub fn page_view(page: Page) -> impl IntoView {
    match page {
        Page::Home => Either::Left(view! { <HomePage/> }),
        Page::Failure(failure) => Either::Right(view! { <ErrorFallback failure=failure/> }),
    }
}
