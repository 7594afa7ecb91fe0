//! Fallback content for failed renders.
//!
//! ERROR HANDLING
//! ==============
//! The server catches a failure once at its outermost layer and hands it
//! here as a [`RenderFailure`]. This is a display, not a recovery path:
//! nothing is retried.

#[cfg(test)]
#[path = "error_fallback_test.rs"]
mod error_fallback_test;

use std::any::Any;

use leptos::prelude::*;

const UNEXPECTED_HEADING: &str = "Unexpected error has occurred.";
const UNKNOWN_DETAIL: &str = "Unknown error";

/// Why a page could not be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderFailure {
    /// Structured routing failure (unmatched path, rejected input).
    Route { status: u16, status_text: String, data: String },
    /// Runtime failure with a message.
    Runtime { message: String },
    /// Failure that carried nothing readable.
    Unknown,
}

impl RenderFailure {
    #[must_use]
    pub fn route(status: u16, status_text: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Route { status, status_text: status_text.into(), data: data.into() }
    }

    /// Classify an error value by its `Display` output.
    #[must_use]
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::Runtime { message: err.to_string() }
    }

    /// Classify a panic payload. String payloads keep their message,
    /// anything else is unknown.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            Self::Runtime { message: (*message).to_owned() }
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::Runtime { message: message.clone() }
        } else {
            Self::Unknown
        }
    }

    /// HTTP status to answer with.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Route { status, .. } => *status,
            Self::Runtime { .. } | Self::Unknown => 500,
        }
    }

    /// Heading and detail line shown to the user.
    #[must_use]
    pub fn display_text(&self) -> (String, String) {
        match self {
            Self::Route { status, status_text, data } => (format!("{status} {status_text}"), data.clone()),
            Self::Runtime { message } => (UNEXPECTED_HEADING.to_owned(), message.clone()),
            Self::Unknown => (UNEXPECTED_HEADING.to_owned(), UNKNOWN_DETAIL.to_owned()),
        }
    }
}

/// Minimal human-readable display of a [`RenderFailure`].
#[component]
pub fn ErrorFallback(failure: RenderFailure) -> impl IntoView {
    let (heading, detail) = failure.display_text();

    view! {
        <section class="error-fallback">
            <h1>{heading}</h1>
            <p>{detail}</p>
        </section>
    }
}
