//! Pre-paint correction step.
//!
//! When the server could not resolve a theme, the shell emits this script as
//! the first script in `<head>`. The browser runs it synchronously before the
//! stylesheet loads and before any paint, so the `<html>` class is already
//! correct by the time anything is drawn. When the server resolved a theme
//! the script is omitted.

#[cfg(test)]
#[path = "pre_paint_test.rs"]
mod pre_paint_test;

use super::dark_mode::STORAGE_KEY;
use crate::theme::{Theme, ToggleIcon};

/// `id` of the marker `<script>` element.
pub const MARKER_ID: &str = "theme-pre-paint";

/// Source of the marker script.
///
/// Leaves an existing `light`/`dark` class alone, otherwise applies the
/// stored preference or the system scheme and fixes up the `color-scheme`
/// meta to match. The server renders an unresolved toggle pointing at dark,
/// so when the page ends up dark the toggle form is retargeted at light once
/// the body has parsed.
#[must_use]
pub fn script() -> String {
    let light = Theme::Light.as_str();
    let icon = ToggleIcon::for_target(Theme::Light);
    let (glyph, label) = (icon.glyph(), icon.label());
    format!(
        r#"(() => {{
  const cl = document.documentElement.classList;
  if (cl.contains("light") || cl.contains("dark")) return;
  let theme = null;
  try {{ theme = window.localStorage.getItem("{STORAGE_KEY}"); }} catch (_) {{}}
  if (theme !== "light" && theme !== "dark") {{
    theme = window.matchMedia("(prefers-color-scheme: dark)").matches ? "dark" : "light";
  }}
  cl.add(theme);
  const meta = document.querySelector("meta[name=color-scheme]");
  if (meta) meta.content = theme === "dark" ? "dark light" : "light dark";
  if (theme !== "dark") return;
  const retarget = () => document.querySelectorAll("form.theme-toggle").forEach((form) => {{
    const input = form.querySelector("input[name=theme]");
    if (input) input.value = "{light}";
    const button = form.querySelector("button");
    if (button) {{
      button.textContent = "{glyph}";
      button.title = "{label}";
      button.setAttribute("aria-label", "{label}");
    }}
  }});
  if (document.readyState === "loading") document.addEventListener("DOMContentLoaded", retarget);
  else retarget();
}})();"#
    )
}
