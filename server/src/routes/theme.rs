//! Theme resolver, session extractor and theme-change endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page handler takes a [`ThemeResolver`] to learn the theme stored in
//! the request's cookie. The change endpoints validate the requested value,
//! ask the session store for a fresh cookie and attach it to the response.
//! The form action answers with a redirect so the browser re-renders; the
//! JSON endpoint answers with the committed value for the hydrated client.

use std::convert::Infallible;
use std::sync::Arc;

use axum::Form;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use todo_ui::components::error_fallback::RenderFailure;
use todo_ui::net::types::{ThemeChangeRequest, ThemeChangeResponse};
use todo_ui::theme::{ParseThemeError, Theme};

use super::pages;
use crate::services::session::{SessionError, ThemeSession, ThemeSessionStore};
use crate::state::AppState;

// =============================================================================
// RESOLVER EXTRACTOR
// =============================================================================

/// Theme stored in the request cookie, plus the store to commit a new one.
/// Never rejects: a bad cookie reads as unset.
pub struct ThemeResolver {
    session: ThemeSession,
    store: Arc<ThemeSessionStore>,
}

impl<S> FromRequestParts<S> for ThemeResolver
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let session = app_state.sessions.resolve(&jar);
        Ok(Self { session, store: app_state.sessions })
    }
}

impl ThemeResolver {
    /// Stored theme, `None` when unset.
    #[must_use]
    pub fn get_theme(&self) -> Option<Theme> {
        self.session.theme()
    }

    /// Cookie that persists `change`; `None` clears the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session record fails to encode.
    pub fn commit(&self, change: Option<Theme>) -> Result<Cookie<'static>, SessionError> {
        match change {
            Some(theme) => self.store.commit(theme),
            None => Ok(self.store.destroy()),
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ThemeChangeError {
    #[error(transparent)]
    InvalidTheme(#[from] ParseThemeError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

pub(crate) fn theme_change_error_to_status(err: &ThemeChangeError) -> StatusCode {
    match err {
        ThemeChangeError::InvalidTheme(_) => StatusCode::BAD_REQUEST,
        ThemeChangeError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Parse a requested theme. Missing or empty clears the stored theme.
///
/// # Errors
///
/// Returns an error for any value outside `light` / `dark`.
pub fn parse_theme_change(raw: Option<&str>) -> Result<Option<Theme>, ParseThemeError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

fn apply_change(resolver: &ThemeResolver, raw: Option<&str>) -> Result<(Cookie<'static>, Option<Theme>), ThemeChangeError> {
    let theme = parse_theme_change(raw)?;
    let cookie = resolver.commit(theme)?;
    tracing::info!(from = ?resolver.get_theme(), to = ?theme, "theme changed");
    Ok((cookie, theme))
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    theme: String,
}

/// `POST /action/set-theme`: commit the form value and redirect to `/`.
pub async fn set_theme_form(
    State(state): State<AppState>,
    resolver: ThemeResolver,
    Form(form): Form<ThemeForm>,
) -> Response {
    match apply_change(&resolver, Some(&form.theme)) {
        Ok((cookie, _)) => (CookieJar::new().add(cookie), Redirect::to("/")).into_response(),
        Err(e) => {
            let status = theme_change_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "theme commit failed");
            } else {
                tracing::warn!(error = %e, "rejected theme change");
            }
            let failure =
                RenderFailure::route(status.as_u16(), status.canonical_reason().unwrap_or_default(), e.to_string());
            pages::render_failure(&state, resolver.get_theme(), failure)
        }
    }
}

/// `POST /api/theme`: commit the JSON value and echo it back.
///
/// A body that does not deserialize gets the same 400 envelope as an
/// unknown theme.
pub async fn set_theme_json(
    resolver: ThemeResolver,
    body: Result<Json<ThemeChangeRequest>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::warn!(error = %message, "rejected theme change body");
            return (StatusCode::BAD_REQUEST, Json(ThemeChangeResponse::rejected(message))).into_response();
        }
    };
    match apply_change(&resolver, body.theme.as_deref()) {
        Ok((cookie, theme)) => (CookieJar::new().add(cookie), Json(ThemeChangeResponse::accepted(theme))).into_response(),
        Err(e) => {
            let status = theme_change_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "theme commit failed");
            } else {
                tracing::warn!(error = %e, "rejected theme change");
            }
            (status, Json(ThemeChangeResponse::rejected(e.to_string()))).into_response()
        }
    }
}

/// `GET /api/theme`: report the stored theme.
pub async fn current_theme(resolver: ThemeResolver) -> Json<ThemeChangeResponse> {
    Json(ThemeChangeResponse::accepted(resolver.get_theme()))
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
