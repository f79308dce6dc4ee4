use super::*;

// =============================================================
// Theme parsing
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn theme_parse_accepts_stored_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_from_stored_falls_back_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn theme_survives_storage_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

// =============================================================
// Toggle + icon
// =============================================================

#[test]
fn theme_toggle_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_toggle_twice_restores_theme_and_icon() {
    for theme in [Theme::Light, Theme::Dark] {
        let back = theme.toggled().toggled();
        assert_eq!(back, theme);
        assert_eq!(back.icon(), theme.icon());
    }
}

#[test]
fn theme_icon_shows_moon_when_light() {
    assert_eq!(Theme::Light.icon(), "🌙");
    assert_eq!(Theme::Dark.icon(), "☀️");
}
