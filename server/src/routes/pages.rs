//! Page routes and the outermost failure boundary.
//!
//! ERROR HANDLING
//! ==============
//! Unmatched paths and rejected form input become route failures rendered
//! inside the normal layout. Panics anywhere below the router are caught by
//! `CatchPanicLayer` and handed to [`render_panic`]. Nothing is retried.

use std::any::Any;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use leptos::config::LeptosOptions;
use todo_ui::app::render_document;
use todo_ui::components::error_fallback::RenderFailure;
use todo_ui::pages::Page;
use todo_ui::theme::Theme;

use super::theme::ThemeResolver;
use crate::state::AppState;

/// `GET /`: the home page in the stored theme.
pub async fn index(State(state): State<AppState>, resolver: ThemeResolver) -> Html<String> {
    Html(render_document(resolver.get_theme(), Page::Home, state.leptos.clone()))
}

/// Fallback for every unmatched path.
pub async fn not_found(State(state): State<AppState>, resolver: ThemeResolver, uri: Uri) -> Response {
    let failure = RenderFailure::route(404, "Not Found", format!("No page at {}", uri.path()));
    render_failure(&state, resolver.get_theme(), failure)
}

/// Render `failure` inside the layout with its status code.
pub fn render_failure(state: &AppState, theme: Option<Theme>, failure: RenderFailure) -> Response {
    let status = StatusCode::from_u16(failure.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let html = render_document(theme, Page::Failure(failure), state.leptos.clone());
    (status, Html(html)).into_response()
}

/// Panic handler for `CatchPanicLayer`.
///
/// The request is gone by now, so the fallback renders unresolved and lets
/// the pre-paint step pick the theme.
pub fn render_panic(options: &LeptosOptions, payload: Box<dyn Any + Send + 'static>) -> Response {
    let failure = RenderFailure::from_panic(&*payload);
    tracing::error!(?failure, "request handler panicked");
    let html = render_document(None, Page::Failure(failure), options.clone());
    (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
