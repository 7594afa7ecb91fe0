//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only immutable data built at startup: the parsed config, the Leptos
//! site options and the session store with its signing keys. No per-request data lives here; the
//! theme of a request comes from its own cookie.

use std::sync::Arc;

use leptos::config::LeptosOptions;

use crate::config::AppConfig;
use crate::services::session::{SessionError, ThemeSessionStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<ThemeSessionStore>,
    pub leptos: LeptosOptions,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the session store cannot be built from the config.
    pub fn new(config: AppConfig, leptos: LeptosOptions) -> Result<Self, SessionError> {
        let sessions = ThemeSessionStore::new(&config.session)?;
        Ok(Self { config: Arc::new(config), sessions: Arc::new(sessions), leptos })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::{CookieSettings, RunMode, SessionConfig};

    /// Development config with a fixed test secret.
    #[must_use]
    pub fn test_config() -> AppConfig {
        AppConfig {
            mode: RunMode::Development,
            port: 0,
            session: SessionConfig {
                secrets: vec!["test-secret".to_owned()],
                using_default_secret: false,
                cookie: CookieSettings { domain: None, secure: false },
            },
        }
    }

    /// Site options with a bundle name, as cargo-leptos would export them.
    #[must_use]
    pub fn test_leptos_options() -> LeptosOptions {
        LeptosOptions::builder().output_name("todo-ui").build()
    }

    /// Create a test `AppState` from [`test_config`].
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(test_config(), test_leptos_options()).expect("test config should build a session store")
    }
}
