use super::*;

fn stored(value: Option<Theme>) -> MemoryStore {
    MemoryStore { value }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_known_values_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn flipped_alternates() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn initial_theme_prefers_stored_value_over_os() {
    for os_dark in [false, true] {
        assert_eq!(initial_theme(Some(Theme::Light), os_dark), Theme::Light);
        assert_eq!(initial_theme(Some(Theme::Dark), os_dark), Theme::Dark);
    }
    assert_eq!(initial_theme(None, false), Theme::Light);
    assert_eq!(initial_theme(None, true), Theme::Dark);
}

// =============================================================
// ThemeManager
// =============================================================

#[test]
fn new_does_not_persist_os_value() {
    let manager = ThemeManager::new(stored(None), true);
    assert_eq!(manager.applied(), Theme::Dark);
    assert!(!manager.has_explicit_choice());
}

#[test]
fn toggle_flips_and_persists() {
    let mut manager = ThemeManager::new(stored(None), false);
    assert_eq!(manager.toggle().unwrap(), Theme::Dark);
    assert_eq!(manager.applied(), Theme::Dark);
    assert_eq!(manager.store().value, Some(Theme::Dark));

    assert_eq!(manager.toggle().unwrap(), Theme::Light);
    assert_eq!(manager.store().value, Some(Theme::Light));
}

#[test]
fn os_change_followed_when_unset() {
    let mut manager = ThemeManager::new(stored(None), false);
    assert_eq!(manager.on_os_change(true), Some(Theme::Dark));
    assert_eq!(manager.applied(), Theme::Dark);
    assert_eq!(manager.on_os_change(false), Some(Theme::Light));
    assert!(!manager.has_explicit_choice());
}

#[test]
fn os_change_without_difference_is_noop() {
    let mut manager = ThemeManager::new(stored(None), true);
    assert_eq!(manager.on_os_change(true), None);
}

#[test]
fn explicit_choice_is_never_overwritten_by_os() {
    let mut manager = ThemeManager::new(stored(Some(Theme::Light)), true);
    assert_eq!(manager.applied(), Theme::Light);
    assert_eq!(manager.on_os_change(true), None);
    assert_eq!(manager.on_os_change(false), None);
    assert_eq!(manager.applied(), Theme::Light);
}

#[test]
fn toggle_makes_choice_sticky_against_os() {
    let mut manager = ThemeManager::new(stored(None), false);
    manager.toggle().unwrap();
    assert_eq!(manager.on_os_change(false), None);
    assert_eq!(manager.applied(), Theme::Dark);
}

#[test]
fn set_persists_given_theme() {
    let mut manager = ThemeManager::new(stored(None), true);
    assert_eq!(manager.set(Theme::Light).unwrap(), Theme::Light);
    assert_eq!(manager.store().value, Some(Theme::Light));
}

#[test]
fn unavailable_media_query_reads_as_light() {
    assert!(!media_prefers_dark(None));
    assert!(!media_prefers_dark(Some(false)));
    assert!(media_prefers_dark(Some(true)));
}

#[test]
fn stored_choice_applies_without_media_query() {
    let manager = ThemeManager::new(stored(Some(Theme::Dark)), media_prefers_dark(None));
    assert_eq!(manager.applied(), Theme::Dark);

    let manager = ThemeManager::new(stored(None), media_prefers_dark(None));
    assert_eq!(manager.applied(), Theme::Light);
}
