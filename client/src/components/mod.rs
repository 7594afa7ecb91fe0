//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and read the theme from the
//! context provided by the layout.

pub mod error_fallback;
pub mod site_header;
pub mod theme_toggle;
