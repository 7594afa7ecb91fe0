use super::*;

#[test]
fn request_accepts_missing_and_null_theme() {
    let missing: ThemeChangeRequest = serde_json::from_str("{}").unwrap();
    let null: ThemeChangeRequest = serde_json::from_str(r#"{"theme":null}"#).unwrap();
    assert_eq!(missing.theme, None);
    assert_eq!(null.theme, None);
}

#[test]
fn request_keeps_unknown_values_as_raw_strings() {
    let req: ThemeChangeRequest = serde_json::from_str(r#"{"theme":"purple"}"#).unwrap();
    assert_eq!(req.theme.as_deref(), Some("purple"));
}

#[test]
fn accepted_response_omits_message() {
    let json = serde_json::to_value(ThemeChangeResponse::accepted(Some(Theme::Dark))).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true, "theme": "dark" }));
}

#[test]
fn rejected_response_carries_message() {
    let json = serde_json::to_value(ThemeChangeResponse::rejected("nope")).unwrap();
    assert_eq!(json, serde_json::json!({ "success": false, "theme": null, "message": "nope" }));
}
