//! Networking modules for the theme endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side calls and `types` defines the wire schema
//! shared with the server crate.

pub mod api;
pub mod types;
