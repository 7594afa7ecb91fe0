//! Reactive state provided through Leptos context.

pub mod theme;
