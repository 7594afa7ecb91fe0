//! Domain services used by the HTTP routes.
//!
//! Service modules own cookie signing and session encoding so route handlers
//! can stay focused on protocol translation.

pub mod session;
