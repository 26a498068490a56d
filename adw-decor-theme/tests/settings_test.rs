//! Tests for loading decoration settings from disk

use std::fs;

use adw_decor_theme::color::to_hex;
use adw_decor_theme::palette::{Palette, Variant};
use adw_decor_theme::settings::{ColorSlot, DarkThemePreference, SettingsStore};
use adw_decor_theme::ThemeError;

#[test]
fn test_load_file_merges_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let system = dir.path().join("system.toml");
    let user = dir.path().join("user.toml");

    fs::write(
        &system,
        r##"
[Decoration]
DarkTheme = 2
HideTitlebarWhenMaximized = true

[Decoration.Colors]
Foreground = "#111111"
BackgroundStart = "#222222"
"##,
    )
    .unwrap();
    fs::write(
        &user,
        r##"
[Decoration]
HideTitlebarWhenMaximized = false

[Decoration.Colors]
Foreground = "#333333"
"##,
    )
    .unwrap();

    let mut store = SettingsStore::new();
    smol::block_on(async {
        store.load_file(&system).await.unwrap();
        store.load_file(&user).await.unwrap();
    });

    let decoration = store.decoration();
    assert_eq!(
        decoration.dark_theme_preference().unwrap(),
        DarkThemePreference::Always
    );
    assert!(!decoration.hide_titlebar_when_maximized());
    assert_eq!(
        decoration.color_overrides(false).get(ColorSlot::Foreground),
        Some("#333333")
    );
    assert_eq!(
        decoration.color_overrides(false).get(ColorSlot::BackgroundStart),
        Some("#222222")
    );
    assert_eq!(store.loaded_files(), &[system, user]);
}

#[test]
fn test_load_file_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[Decoration\nDarkTheme = ").unwrap();

    let mut store = SettingsStore::new();
    let result = smol::block_on(store.load_file(&broken));

    assert!(matches!(result, Err(ThemeError::ParseError(_, _))));
    assert!(store.loaded_files().is_empty());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SettingsStore::new();
    let result = smol::block_on(store.load_file(&dir.path().join("absent.toml")));

    assert!(matches!(result, Err(ThemeError::ReadError(_, _))));
}

#[test]
fn test_unknown_dark_preference_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[Decoration]\nDarkTheme = \"sometimes\"\n").unwrap();

    let mut store = SettingsStore::new();
    smol::block_on(store.load_file(&path)).unwrap();

    assert!(matches!(
        store.decoration().dark_theme_preference(),
        Err(ThemeError::UnknownDarkThemePreference(_))
    ));
}

#[test]
fn test_dark_overrides_reach_dark_palette_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.toml");
    fs::write(
        &path,
        r##"
[Decoration.Colors.Dark]
Foreground = "#abcdef"
"##,
    )
    .unwrap();

    let mut store = SettingsStore::new();
    smol::block_on(store.load_file(&path)).unwrap();
    let decoration = store.decoration();

    let dark = Palette::resolve(Variant::Dark, decoration.color_overrides(true));
    let light = Palette::resolve(Variant::Light, decoration.color_overrides(false));

    assert_eq!(to_hex(dark.foreground), "#abcdef");
    assert_eq!(to_hex(light.foreground), "#2e3436");
}

#[test]
fn test_mistyped_key_keeps_rest_of_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let user = dir.path().join("user.toml");
    fs::write(&base, "[Decoration]\nHideTitlebarWhenMaximized = true\n").unwrap();
    fs::write(
        &user,
        r##"
[Decoration]
DarkTheme = "always"
HideTitlebarWhenMaximized = 1

[Decoration.Colors]
Foreground = "#111111"
"##,
    )
    .unwrap();

    let mut store = SettingsStore::new();
    smol::block_on(async {
        store.load_file(&base).await.unwrap();
        store.load_file(&user).await.unwrap();
    });

    let decoration = store.decoration();
    assert_eq!(
        decoration.dark_theme_preference().unwrap(),
        DarkThemePreference::Always
    );
    // The mistyped value is skipped, so the earlier file's value survives.
    assert!(decoration.hide_titlebar_when_maximized());
    assert_eq!(
        decoration.color_overrides(false).get(ColorSlot::Foreground),
        Some("#111111")
    );
    assert_eq!(store.loaded_files(), &[base, user]);
}
