//! Browser-side theme application and local preference.
//!
//! Applies the theme class to the `<html>` element and mirrors the choice
//! into `localStorage`, which is the client-local fallback the pre-paint
//! step reads when the server has no cookie yet. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::theme::Theme;

/// `localStorage` key holding the last theme chosen in this browser.
pub const STORAGE_KEY: &str = "todo_app_theme";

/// Read the local preference: stored choice first, then the system scheme.
pub fn read_preference() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Ok(theme) = val.parse::<Theme>() {
                    return Some(theme);
                }
            }
        }

        let dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        Some(if dark { Theme::Dark } else { Theme::Light })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn root_class_theme(doc: &web_sys::Document) -> Option<Theme> {
    let classes = doc.document_element()?.class_list();
    [Theme::Dark, Theme::Light].into_iter().find(|theme| classes.contains(theme.as_str()))
}

/// Theme currently carried by the `<html>` class list, if any.
///
/// After the server render or the pre-paint step this is the theme the user
/// is looking at.
pub fn read_document_theme() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        root_class_theme(&doc).or_else(read_preference)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Theme the server rendered with. `None` when the pre-paint marker is
/// present, since any class on `<html>` then came from the client.
pub fn read_server_theme() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        if doc.get_element_by_id(super::pre_paint::MARKER_ID).is_some() {
            return None;
        }
        root_class_theme(&doc)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Swap the theme class on `<html>` and update the `color-scheme` meta.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = doc.document_element() {
            let classes = el.class_list();
            let _ = classes.remove_1(theme.toggled().as_str());
            let _ = classes.add_1(theme.as_str());
        }
        if let Ok(Some(meta)) = doc.query_selector("meta[name=color-scheme]") {
            let _ = meta.set_attribute("content", crate::theme::color_scheme_hint(Some(theme)));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist the local preference to `localStorage`.
pub fn store_preference(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
