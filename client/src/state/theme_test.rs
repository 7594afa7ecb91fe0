use super::*;

fn in_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
}

#[test]
fn unresolved_state_has_no_theme() {
    in_owner(|| {
        let state = ThemeState::provide(None);
        assert_eq!(state.current(), None);
        assert!(!state.ssr_resolved());
        assert_eq!(state.toggle_target(), Theme::Dark);
    });
}

#[test]
fn resolved_state_reports_ssr_resolution() {
    in_owner(|| {
        let state = ThemeState::provide(Some(Theme::Dark));
        assert_eq!(state.current(), Some(Theme::Dark));
        assert!(state.ssr_resolved());
        assert_eq!(state.toggle_target(), Theme::Light);
    });
}

#[test]
fn toggle_flips_and_returns_new_theme() {
    in_owner(|| {
        let state = ThemeState::provide(Some(Theme::Light));
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.current(), Some(Theme::Dark));
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.current(), Some(Theme::Light));
    });
}

#[test]
fn toggle_from_unset_resolves_to_dark() {
    in_owner(|| {
        let state = ThemeState::provide(None);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.current(), Some(Theme::Dark));
        // The flag describes the server render, not later client changes.
        assert!(!state.ssr_resolved());
    });
}

#[test]
fn use_theme_reads_provided_state() {
    in_owner(|| {
        let provided = ThemeState::provide(Some(Theme::Light));
        provided.set(Theme::Dark);
        assert_eq!(use_theme().current(), Some(Theme::Dark));
    });
}

#[test]
fn adopt_takes_theme_without_marking_resolved() {
    in_owner(|| {
        let state = ThemeState::provide(None);
        state.adopt(Theme::Dark);
        assert_eq!(state.current(), Some(Theme::Dark));
        assert_eq!(state.toggle_target(), Theme::Light);
        assert!(!state.ssr_resolved());
    });
}
