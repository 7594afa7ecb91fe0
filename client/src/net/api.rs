//! REST helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since persisting from the server render makes
//! no sense.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed persist leaves
//! the already-applied theme in place for this page view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::theme::Theme;

#[cfg(any(test, feature = "hydrate"))]
fn persist_failed_message(status: u16) -> String {
    format!("theme persist failed: {status}")
}

/// Persist a theme through `POST /api/theme`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// value.
pub async fn persist_theme(theme: Theme) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{THEME_API_PATH, ThemeChangeRequest, ThemeChangeResponse};

        let payload = ThemeChangeRequest { theme: Some(theme.as_str().to_owned()) };
        let resp = gloo_net::http::Request::post(THEME_API_PATH)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(persist_failed_message(resp.status()));
        }
        let body: ThemeChangeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.success {
            return Err(body.message.unwrap_or_else(|| "theme persist failed".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
        Err("not available on server".to_owned())
    }
}
