//! Shared wire DTOs for the theme endpoints.
//!
//! DESIGN
//! ======
//! The request carries the theme as a raw string so the server can reject
//! values outside the enumeration with its own message instead of a serde
//! rejection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Form action that commits a theme and redirects back to the page.
pub const THEME_ACTION_PATH: &str = "/action/set-theme";

/// JSON endpoint used by the hydrated client.
pub const THEME_API_PATH: &str = "/api/theme";

/// Body of a theme-change request. `None` clears the stored theme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChangeRequest {
    #[serde(default)]
    pub theme: Option<String>,
}

/// Body of every theme endpoint response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChangeResponse {
    pub success: bool,
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ThemeChangeResponse {
    #[must_use]
    pub fn accepted(theme: Option<Theme>) -> Self {
        Self { success: true, theme, message: None }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, theme: None, message: Some(message.into()) }
    }
}
