//! Signed theme session cookie.
//!
//! ARCHITECTURE
//! ============
//! The whole session lives in one client-held cookie, `__theme`. Its value is
//! `<payload>.<signature>`: the payload is the base64 JSON record and the
//! signature is unpadded base64 HMAC-SHA256 of the payload under the first
//! configured secret. Every configured secret is tried on the way in, so a
//! secret can be rotated without logging everyone out of their theme.
//!
//! ERROR HANDLING
//! ==============
//! Decoding failures are not request failures. [`ThemeSessionStore::resolve`]
//! logs them at debug and reports the theme as unset.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use time::Duration;
use todo_ui::theme::Theme;

use crate::config::{CookieSettings, SessionConfig};

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "__theme";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no signing secret configured")]
    NoSecrets,
    #[error("invalid signing key: {0}")]
    InvalidKey(#[from] hmac::digest::InvalidLength),
    #[error("session encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a cookie value was ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("cookie value has no signature")]
    MissingSignature,
    #[error("signature does not match any configured secret")]
    BadSignature,
    #[error("payload is not valid base64")]
    Encoding,
    #[error("payload is not a session record: {0}")]
    Record(String),
}

// =============================================================================
// RECORD
// =============================================================================

/// Everything the session stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

// =============================================================================
// SIGNER
// =============================================================================

/// HMAC-SHA256 sign/verify over cookie payloads.
#[derive(Clone)]
pub struct SessionSigner {
    /// One keyed MAC per secret; index 0 signs.
    macs: Vec<HmacSha256>,
}

impl SessionSigner {
    /// Build a signer. The first secret signs; all of them verify.
    ///
    /// # Errors
    ///
    /// Returns an error if `secrets` is empty.
    pub fn new<S: AsRef<[u8]>>(secrets: &[S]) -> Result<Self, SessionError> {
        if secrets.is_empty() {
            return Err(SessionError::NoSecrets);
        }
        let macs = secrets
            .iter()
            .map(|secret| HmacSha256::new_from_slice(secret.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { macs })
    }

    /// Append `.<signature>` to `value`.
    #[must_use]
    pub fn sign(&self, value: &str) -> String {
        let mut mac = self.macs[0].clone();
        mac.update(value.as_bytes());
        let signature = STANDARD_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{value}.{signature}")
    }

    /// Strip and verify the signature, returning the signed value.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no signature or no secret verifies it.
    pub fn unsign<'a>(&self, signed: &'a str) -> Result<&'a str, DecodeError> {
        let (value, signature) = signed.rsplit_once('.').ok_or(DecodeError::MissingSignature)?;
        let signature = STANDARD_NO_PAD
            .decode(signature)
            .map_err(|_| DecodeError::BadSignature)?;

        let verified = self.macs.iter().any(|mac| {
            let mut mac = mac.clone();
            mac.update(value.as_bytes());
            mac.verify_slice(&signature).is_ok()
        });
        if verified { Ok(value) } else { Err(DecodeError::BadSignature) }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Theme read from one request's cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeSession {
    theme: Option<Theme>,
}

impl ThemeSession {
    /// Stored theme, `None` when unset or the cookie was rejected.
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }
}

/// Encodes, signs and decodes the `__theme` cookie.
#[derive(Clone)]
pub struct ThemeSessionStore {
    signer: SessionSigner,
    cookie: CookieSettings,
}

impl ThemeSessionStore {
    /// # Errors
    ///
    /// Returns an error if the config carries no secrets.
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        Ok(Self { signer: SessionSigner::new(config.secrets.as_slice())?, cookie: config.cookie.clone() })
    }

    /// Read the theme from the request cookies. Never fails.
    #[must_use]
    pub fn resolve(&self, jar: &CookieJar) -> ThemeSession {
        let Some(cookie) = jar.get(COOKIE_NAME) else {
            return ThemeSession::default();
        };
        match self.decode(cookie.value()) {
            Ok(record) => ThemeSession { theme: record.theme },
            Err(e) => {
                tracing::debug!(error = %e, "ignoring theme cookie");
                ThemeSession::default()
            }
        }
    }

    /// Verify and parse a raw cookie value.
    ///
    /// # Errors
    ///
    /// Returns the first check the value fails.
    pub fn decode(&self, raw: &str) -> Result<SessionRecord, DecodeError> {
        let payload = self.signer.unsign(raw)?;
        let json = STANDARD.decode(payload).map_err(|_| DecodeError::Encoding)?;
        serde_json::from_slice(&json).map_err(|e| DecodeError::Record(e.to_string()))
    }

    /// Serialize and sign a record into a cookie value.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails to serialize.
    pub fn encode(&self, record: &SessionRecord) -> Result<String, SessionError> {
        let json = serde_json::to_vec(record)?;
        Ok(self.signer.sign(&STANDARD.encode(json)))
    }

    /// Cookie persisting `theme`. Attaching it to the response is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails to serialize.
    pub fn commit(&self, theme: Theme) -> Result<Cookie<'static>, SessionError> {
        let value = self.encode(&SessionRecord { theme: Some(theme) })?;
        Ok(self.build_cookie(value))
    }

    /// Cookie that removes the session from the browser.
    #[must_use]
    pub fn destroy(&self) -> Cookie<'static> {
        let mut cookie = self.build_cookie(String::new());
        cookie.set_max_age(Duration::ZERO);
        cookie
    }

    fn build_cookie(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::build((COOKIE_NAME, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.cookie.secure)
            .build();
        if let Some(domain) = &self.cookie.domain {
            cookie.set_domain(domain.clone());
        }
        cookie
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
