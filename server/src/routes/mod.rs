//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the page routes, the theme endpoints and the static
//! `/pkg` assets under a single Axum router. The panic boundary sits just
//! inside the trace layer so caught panics are still logged as 500s.

pub mod pages;
pub mod theme;

use std::any::Any;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use todo_ui::net::types::{THEME_ACTION_PATH, THEME_API_PATH};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let site_root_path = PathBuf::from(state.leptos.site_root.as_ref());

    let router = Router::new()
        .route("/", get(pages::index))
        .route(THEME_ACTION_PATH, post(theme::set_theme_form))
        .route(THEME_API_PATH, get(theme::current_theme).post(theme::set_theme_json))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(pages::not_found);
    with_failure_layers(router, &state).with_state(state)
}

/// Panic boundary inside request tracing: a panic anywhere below lands on
/// the fallback page as a 500.
pub(crate) fn with_failure_layers(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let options = state.leptos.clone();
    router
        .layer(CatchPanicLayer::custom(move |payload: Box<dyn Any + Send + 'static>| {
            pages::render_panic(&options, payload)
        }))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
