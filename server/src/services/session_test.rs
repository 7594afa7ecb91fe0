use base64::Engine as _;

use super::*;

fn session_config(secrets: &[&str], cookie: CookieSettings) -> SessionConfig {
    SessionConfig {
        secrets: secrets.iter().map(|s| (*s).to_owned()).collect(),
        using_default_secret: false,
        cookie,
    }
}

fn dev_store(secrets: &[&str]) -> ThemeSessionStore {
    ThemeSessionStore::new(&session_config(secrets, CookieSettings { domain: None, secure: false })).unwrap()
}

fn jar_with(value: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(COOKIE_NAME, value.to_owned()))
}

fn flip_last_char(value: &str) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    let last = chars.pop().unwrap();
    chars.push(if last == 'A' { 'B' } else { 'A' });
    chars.into_iter().collect()
}

// =============================================================================
// SessionSigner
// =============================================================================

#[test]
fn signer_requires_a_secret() {
    let empty: [&str; 0] = [];
    assert!(matches!(SessionSigner::new(&empty), Err(SessionError::NoSecrets)));
}

#[test]
fn signed_value_has_unpadded_signature() {
    let signer = SessionSigner::new(&["secret"]).unwrap();
    let signed = signer.sign("payload");
    let (value, signature) = signed.rsplit_once('.').unwrap();
    assert_eq!(value, "payload");
    // 32-byte MAC, unpadded base64.
    assert_eq!(signature.len(), 43);
    assert!(!signature.contains('='));
}

#[test]
fn unsign_returns_original_value() {
    let signer = SessionSigner::new(&["secret"]).unwrap();
    let signed = signer.sign("payload");
    assert_eq!(signer.unsign(&signed), Ok("payload"));
}

#[test]
fn unsign_rejects_missing_signature() {
    let signer = SessionSigner::new(&["secret"]).unwrap();
    assert_eq!(signer.unsign("payload"), Err(DecodeError::MissingSignature));
}

#[test]
fn unsign_rejects_other_secret() {
    let signed = SessionSigner::new(&["one"]).unwrap().sign("payload");
    let other = SessionSigner::new(&["two"]).unwrap();
    assert_eq!(other.unsign(&signed), Err(DecodeError::BadSignature));
}

#[test]
fn unsign_accepts_any_listed_secret() {
    let signed = SessionSigner::new(&["old"]).unwrap().sign("payload");
    let rotated = SessionSigner::new(&["new", "old"]).unwrap();
    assert_eq!(rotated.unsign(&signed), Ok("payload"));
    // Signing always uses the first secret.
    assert_eq!(SessionSigner::new(&["new"]).unwrap().unsign(&rotated.sign("x")), Ok("x"));
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn commit_then_resolve_round_trips_every_theme() {
    let store = dev_store(&["secret"]);
    for theme in [Theme::Light, Theme::Dark] {
        let cookie = store.commit(theme).unwrap();
        let jar = CookieJar::new().add(cookie);
        assert_eq!(store.resolve(&jar).theme(), Some(theme));
    }
}

#[test]
fn missing_cookie_resolves_unset() {
    let store = dev_store(&["secret"]);
    assert_eq!(store.resolve(&CookieJar::new()).theme(), None);
}

#[test]
fn empty_record_resolves_unset() {
    let store = dev_store(&["secret"]);
    let value = store.encode(&SessionRecord::default()).unwrap();
    assert_eq!(store.decode(&value), Ok(SessionRecord { theme: None }));
    assert_eq!(store.resolve(&jar_with(&value)).theme(), None);
}

// =============================================================================
// Tampering and garbage: always unset, never an error
// =============================================================================

#[test]
fn tampered_signature_resolves_unset() {
    let store = dev_store(&["secret"]);
    let value = store.commit(Theme::Dark).unwrap().value().to_owned();
    let tampered = flip_last_char(&value);
    assert_eq!(store.decode(&tampered), Err(DecodeError::BadSignature));
    assert_eq!(store.resolve(&jar_with(&tampered)).theme(), None);
}

#[test]
fn swapped_payload_resolves_unset() {
    let store = dev_store(&["secret"]);
    let dark = store.commit(Theme::Dark).unwrap().value().to_owned();
    let light = store.commit(Theme::Light).unwrap().value().to_owned();
    let (_, dark_sig) = dark.rsplit_once('.').unwrap();
    let (light_payload, _) = light.rsplit_once('.').unwrap();
    let forged = format!("{light_payload}.{dark_sig}");
    assert_eq!(store.resolve(&jar_with(&forged)).theme(), None);
}

#[test]
fn cookie_from_other_secret_resolves_unset() {
    let value = dev_store(&["one"]).commit(Theme::Dark).unwrap().value().to_owned();
    assert_eq!(dev_store(&["two"]).resolve(&jar_with(&value)).theme(), None);
}

#[test]
fn cookie_from_rotated_secret_still_resolves() {
    let value = dev_store(&["old"]).commit(Theme::Dark).unwrap().value().to_owned();
    assert_eq!(dev_store(&["new", "old"]).resolve(&jar_with(&value)).theme(), Some(Theme::Dark));
}

#[test]
fn garbage_values_resolve_unset() {
    let store = dev_store(&["secret"]);
    for raw in ["", "no-dot", "a.b.c", "!!!.???"] {
        assert_eq!(store.resolve(&jar_with(raw)).theme(), None, "raw = {raw:?}");
    }
}

#[test]
fn signed_non_base64_payload_is_an_encoding_error() {
    let store = dev_store(&["secret"]);
    let signed = SessionSigner::new(&["secret"]).unwrap().sign("not base64!");
    assert_eq!(store.decode(&signed), Err(DecodeError::Encoding));
}

#[test]
fn signed_unknown_theme_is_a_record_error() {
    let store = dev_store(&["secret"]);
    let payload = STANDARD.encode(br#"{"theme":"purple"}"#);
    let signed = SessionSigner::new(&["secret"]).unwrap().sign(&payload);
    assert!(matches!(store.decode(&signed), Err(DecodeError::Record(_))));
    assert_eq!(store.resolve(&jar_with(&signed)).theme(), None);
}

// =============================================================================
// Cookie attributes
// =============================================================================

#[test]
fn development_cookie_attributes() {
    let header = dev_store(&["secret"]).commit(Theme::Light).unwrap().to_string();
    assert!(header.starts_with("__theme="));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
    assert!(header.contains("Path=/"));
    assert!(!header.contains("Secure"));
    assert!(!header.contains("Domain"));
}

#[test]
fn production_cookie_adds_domain_and_secure() {
    let store = ThemeSessionStore::new(&session_config(
        &["secret"],
        CookieSettings { domain: Some("todo.example.com".to_owned()), secure: true },
    ))
    .unwrap();
    let header = store.commit(Theme::Dark).unwrap().to_string();
    assert!(header.contains("Secure"));
    assert!(header.contains("Domain=todo.example.com"));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
}

#[test]
fn destroy_expires_the_cookie() {
    let cookie = dev_store(&["secret"]).destroy();
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert!(cookie.to_string().contains("Max-Age=0"));
}
