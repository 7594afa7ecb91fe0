use super::*;

#[test]
fn script_reads_local_preference_key() {
    assert!(script().contains(&format!("getItem(\"{STORAGE_KEY}\")")));
}

#[test]
fn script_falls_back_to_system_scheme() {
    assert!(script().contains("prefers-color-scheme: dark"));
}

#[test]
fn script_keeps_server_resolved_class() {
    assert!(script().contains(r#"if (cl.contains("light") || cl.contains("dark")) return;"#));
}

#[test]
fn script_has_no_closing_tag() {
    assert!(!script().contains("</script"));
}

#[test]
fn script_retargets_toggle_when_painting_dark() {
    let source = script();
    let guard = source.find(r#"if (theme !== "dark") return;"#).expect("dark-only guard");
    let retarget = source.find("form.theme-toggle").expect("toggle selector");
    assert!(guard < retarget);
    assert!(source.contains(r#"input.value = "light""#));
    assert!(source.contains(ToggleIcon::Sun.glyph()));
    assert!(source.contains(ToggleIcon::Sun.label()));
}

#[test]
fn script_waits_for_body_before_retargeting() {
    assert!(script().contains(r#"addEventListener("DOMContentLoaded", retarget)"#));
}
