//! Per-render theme context.
//!
//! DESIGN
//! ======
//! Every render gets its own `ThemeState`, provided into the reactive owner
//! that renders the request. Nothing is shared between requests; the cookie
//! is the only thing that outlives one render.
//!
//! On the client a change is applied to the signal and the `<html>` class in
//! the same call, then persisted in the background. The network round trip
//! never sits between the click and the repaint.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::theme::{Theme, toggle_target};
use crate::util::dark_mode;

/// Resolved theme for one render, readable and settable from components.
#[derive(Clone, Copy, Debug)]
pub struct ThemeState {
    theme: RwSignal<Option<Theme>>,
    ssr_resolved: bool,
}

impl ThemeState {
    /// Create the state for `specified` and provide it as context.
    pub fn provide(specified: Option<Theme>) -> Self {
        let state = Self { theme: RwSignal::new(specified), ssr_resolved: specified.is_some() };
        provide_context(state);
        state
    }

    /// Current theme, `None` while unresolved.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.theme.get()
    }

    /// Whether the server rendered this page with a theme already applied.
    #[must_use]
    pub fn ssr_resolved(&self) -> bool {
        self.ssr_resolved
    }

    /// Theme that the next toggle activation asks for.
    #[must_use]
    pub fn toggle_target(&self) -> Theme {
        toggle_target(self.current())
    }

    /// Switch to `next`: update the signal and the document synchronously,
    /// then persist.
    pub fn set(&self, next: Theme) {
        self.theme.set(Some(next));
        dark_mode::apply(next);
        dark_mode::store_preference(next);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::persist_theme(next).await {
                log::warn!("theme persist failed: {e}");
            }
        });
    }

    /// Take over a theme the document already shows, without persisting.
    pub fn adopt(&self, theme: Theme) {
        if self.theme.get_untracked() != Some(theme) {
            self.theme.set(Some(theme));
        }
    }

    /// Flip to the opposite theme and return it.
    pub fn toggle(&self) -> Theme {
        let next = self.toggle_target();
        self.set(next);
        next
    }
}

/// Read the `ThemeState` provided by the enclosing render.
///
/// # Panics
///
/// Panics if called outside a tree where [`ThemeState::provide`] ran.
pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}
