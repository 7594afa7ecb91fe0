//! Theme value shared by the server resolver and the UI.
//!
//! DESIGN
//! ======
//! Exactly two members. "Unset" is modelled as `Option<Theme>::None` at every
//! call site so the pre-paint step can tell it apart from an explicit
//! `Light`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Light or dark colour scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Wire and CSS class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("theme value of {0} is not a valid theme.")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Theme a toggle activation requests. Unset counts as light.
#[must_use]
pub fn toggle_target(current: Option<Theme>) -> Theme {
    current.unwrap_or(Theme::Light).toggled()
}

/// Value for the `color-scheme` meta tag. Preferred scheme first.
#[must_use]
pub fn color_scheme_hint(theme: Option<Theme>) -> &'static str {
    match theme {
        Some(Theme::Dark) => "dark light",
        Some(Theme::Light) | None => "light dark",
    }
}

// =============================================================================
// TOGGLE ICON
// =============================================================================

/// Icon shown on the toggle. It names where the toggle goes, not where the
/// page currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    #[must_use]
    pub const fn for_target(target: Theme) -> Self {
        match target {
            Theme::Light => Self::Sun,
            Theme::Dark => Self::Moon,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Moon => "☾",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sun => "Switch to light theme",
            Self::Moon => "Switch to dark theme",
        }
    }
}
