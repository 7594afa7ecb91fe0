//! Application configuration parsed from environment variables.
//!
//! Read once at startup. Parsing goes through a lookup function so tests can
//! feed a map instead of touching the process environment.

use leptos::config::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;
/// Fallback signing secret. Weak; only fit for local development.
pub const DEFAULT_SESSION_SECRET: &str = "s3cr3ttt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

/// Attributes that vary between development and production cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub domain: Option<String>,
    pub secure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Signing secrets. The first signs; all of them verify.
    pub secrets: Vec<String>,
    /// True when no secret was configured and the fallback is in use.
    pub using_default_secret: bool,
    pub cookie: CookieSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: RunMode,
    pub port: u16,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var: {var}")]
    MissingVar { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `NODE_ENV`: `production` selects production cookie attributes
    /// - `SESSION_SECRET`: comma-separated signing secrets (default: weak fallback)
    /// - `COOKIE_DOMAIN`: cookie domain, required in production
    /// - `COOKIE_SECURE`: turns on `Secure` in development; production is
    ///   always `Secure` and rejects a false value
    /// - `PORT`: default 3000
    ///
    /// Site root and bundle name come from [`leptos_options`].
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not parse, production is missing its
    /// cookie domain, or production asks for an insecure cookie.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode = match lookup("NODE_ENV").as_deref() {
            Some("production") => RunMode::Production,
            _ => RunMode::Development,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let mut secrets: Vec<String> = lookup("SESSION_SECRET")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        let using_default_secret = secrets.is_empty();
        if using_default_secret {
            secrets.push(DEFAULT_SESSION_SECRET.to_owned());
        }

        let domain = match mode {
            RunMode::Production => Some(
                lookup("COOKIE_DOMAIN")
                    .map(|d| d.trim().to_owned())
                    .filter(|d| !d.is_empty())
                    .ok_or(ConfigError::MissingVar { var: "COOKIE_DOMAIN" })?,
            ),
            RunMode::Development => None,
        };

        // Production cookies are always Secure; the override only opts in.
        let secure = match lookup("COOKIE_SECURE") {
            Some(raw) => match parse_bool(&raw) {
                Some(true) => true,
                Some(false) if mode == RunMode::Development => false,
                _ => return Err(ConfigError::InvalidValue { var: "COOKIE_SECURE", value: raw }),
            },
            None => mode == RunMode::Production,
        };

        Ok(Self {
            mode,
            port,
            session: SessionConfig { secrets, using_default_secret, cookie: CookieSettings { domain, secure } },
        })
    }
}

/// Leptos site options from the environment cargo-leptos exports
/// (`LEPTOS_OUTPUT_NAME`, `LEPTOS_SITE_ROOT`, `LEPTOS_SITE_PKG_DIR`, ...).
///
/// # Errors
///
/// Returns an error if one of those variables is set but unreadable.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(conf.leptos_options)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
