// SPDX-License-Identifier: LGPL-3.0-only

//! Persisted decoration settings.
//!
//! Settings live in a TOML document under the `[Decoration]` group:
//!
//! ```toml
//! [Decoration]
//! DarkTheme = "when-preferred"
//! HideTitlebarWhenMaximized = true
//!
//! [Decoration.Colors]
//! Foreground = "#2e3436"
//!
//! [Decoration.Colors.Dark]
//! Foreground = "#eeeeec"
//! ```
//!
//! Every key is optional. Missing keys fall back to the built-in defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use xdg::BaseDirectories;

use crate::error::{ThemeError, ThemeResult};

/// XDG prefix of the settings namespace.
pub const SETTINGS_PREFIX: &str = "adw-decor";
/// Settings file name inside the XDG directories.
pub const SETTINGS_FILE: &str = "decoration.toml";
/// Environment variable naming an extra settings file, loaded last.
pub const SETTINGS_ENV: &str = "ADW_DECOR_CONFIG";

/// Deserialize an optional key, dropping it with a warning when its value has the
/// wrong type. One bad key must not discard the rest of the group.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(value) = Option::<toml::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match value.clone().try_into::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            log::warn!("Ignoring settings value {}: {}", value, e);
            Ok(None)
        },
    }
}

/// Like [lenient] for nested tables, which fall back to their defaults.
fn lenient_table<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// When the dark palette is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DarkThemePreference {
    /// Always use the light palette.
    Never,
    /// Follow the desktop's dark preference.
    #[default]
    WhenPreferred,
    /// Always use the dark palette.
    Always,
}

impl DarkThemePreference {
    /// Interpret a raw settings value.
    ///
    /// Accepts `never`, `when-preferred` and `always` (case-insensitive) as well as
    /// the legacy integer encoding `0`, `1` and `2`.
    pub fn from_value(value: &toml::Value) -> ThemeResult<Self> {
        match value {
            toml::Value::Integer(0) => Ok(Self::Never),
            toml::Value::Integer(1) => Ok(Self::WhenPreferred),
            toml::Value::Integer(2) => Ok(Self::Always),
            toml::Value::String(name) => match name.to_ascii_lowercase().as_str() {
                "never" => Ok(Self::Never),
                "when-preferred" | "whenpreferred" | "when_preferred" => Ok(Self::WhenPreferred),
                "always" => Ok(Self::Always),
                _ => Err(ThemeError::UnknownDarkThemePreference(name.clone())),
            },
            other => Err(ThemeError::UnknownDarkThemePreference(other.to_string())),
        }
    }

    /// Resolve the preference against the desktop hint.
    pub fn use_dark(self, desktop_prefers_dark: bool) -> bool {
        match self {
            Self::Never => false,
            Self::WhenPreferred => desktop_prefers_dark,
            Self::Always => true,
        }
    }
}

/// A palette slot that can be overridden from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// Title text of the active window.
    Foreground,
    /// Title bar gradient start.
    BackgroundStart,
    /// Title bar gradient end.
    BackgroundEnd,
    /// Title text of inactive windows.
    ForegroundInactive,
    /// Title bar fill of inactive windows.
    BackgroundInactive,
    /// Frame border of the active window.
    Border,
    /// Frame border of inactive windows.
    BorderInactive,
    /// Hovered button fill.
    ButtonHover,
    /// Hovered button outline.
    ButtonHoverBorder,
}

impl ColorSlot {
    /// All slots, in palette order.
    pub const ALL: [ColorSlot; 9] = [
        ColorSlot::Foreground,
        ColorSlot::BackgroundStart,
        ColorSlot::BackgroundEnd,
        ColorSlot::ForegroundInactive,
        ColorSlot::BackgroundInactive,
        ColorSlot::Border,
        ColorSlot::BorderInactive,
        ColorSlot::ButtonHover,
        ColorSlot::ButtonHoverBorder,
    ];

    /// The settings key of this slot.
    pub fn key(self) -> &'static str {
        match self {
            ColorSlot::Foreground => "Foreground",
            ColorSlot::BackgroundStart => "BackgroundStart",
            ColorSlot::BackgroundEnd => "BackgroundEnd",
            ColorSlot::ForegroundInactive => "ForegroundInactive",
            ColorSlot::BackgroundInactive => "BackgroundInactive",
            ColorSlot::Border => "Border",
            ColorSlot::BorderInactive => "BorderInactive",
            ColorSlot::ButtonHover => "ButtonHover",
            ColorSlot::ButtonHoverBorder => "ButtonHoverBorder",
        }
    }
}

/// Per-slot color overrides for one palette variant.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ColorOverrides {
    /// See [ColorSlot::Foreground].
    #[serde(default, deserialize_with = "lenient")]
    pub foreground: Option<String>,
    /// See [ColorSlot::BackgroundStart].
    #[serde(default, deserialize_with = "lenient")]
    pub background_start: Option<String>,
    /// See [ColorSlot::BackgroundEnd].
    #[serde(default, deserialize_with = "lenient")]
    pub background_end: Option<String>,
    /// See [ColorSlot::ForegroundInactive].
    #[serde(default, deserialize_with = "lenient")]
    pub foreground_inactive: Option<String>,
    /// See [ColorSlot::BackgroundInactive].
    #[serde(default, deserialize_with = "lenient")]
    pub background_inactive: Option<String>,
    /// See [ColorSlot::Border].
    #[serde(default, deserialize_with = "lenient")]
    pub border: Option<String>,
    /// See [ColorSlot::BorderInactive].
    #[serde(default, deserialize_with = "lenient")]
    pub border_inactive: Option<String>,
    /// See [ColorSlot::ButtonHover].
    #[serde(default, deserialize_with = "lenient")]
    pub button_hover: Option<String>,
    /// See [ColorSlot::ButtonHoverBorder].
    #[serde(default, deserialize_with = "lenient")]
    pub button_hover_border: Option<String>,
}

impl ColorOverrides {
    /// Get the raw override for a slot.
    pub fn get(&self, slot: ColorSlot) -> Option<&str> {
        self.slot(slot).as_deref()
    }

    /// Set the raw override for a slot.
    pub fn set(&mut self, slot: ColorSlot, value: impl Into<String>) {
        *self.slot_mut(slot) = Some(value.into());
    }

    fn slot(&self, slot: ColorSlot) -> &Option<String> {
        match slot {
            ColorSlot::Foreground => &self.foreground,
            ColorSlot::BackgroundStart => &self.background_start,
            ColorSlot::BackgroundEnd => &self.background_end,
            ColorSlot::ForegroundInactive => &self.foreground_inactive,
            ColorSlot::BackgroundInactive => &self.background_inactive,
            ColorSlot::Border => &self.border,
            ColorSlot::BorderInactive => &self.border_inactive,
            ColorSlot::ButtonHover => &self.button_hover,
            ColorSlot::ButtonHoverBorder => &self.button_hover_border,
        }
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<String> {
        match slot {
            ColorSlot::Foreground => &mut self.foreground,
            ColorSlot::BackgroundStart => &mut self.background_start,
            ColorSlot::BackgroundEnd => &mut self.background_end,
            ColorSlot::ForegroundInactive => &mut self.foreground_inactive,
            ColorSlot::BackgroundInactive => &mut self.background_inactive,
            ColorSlot::Border => &mut self.border,
            ColorSlot::BorderInactive => &mut self.border_inactive,
            ColorSlot::ButtonHover => &mut self.button_hover,
            ColorSlot::ButtonHoverBorder => &mut self.button_hover_border,
        }
    }

    fn merge(&mut self, other: ColorOverrides) {
        for slot in ColorSlot::ALL {
            if let Some(value) = other.slot(slot).clone() {
                *self.slot_mut(slot) = Some(value);
            }
        }
    }
}

/// The `[Decoration.Colors]` table: light overrides plus a nested `Dark` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ColorSettings {
    /// Light variant overrides.
    #[serde(flatten)]
    pub light: ColorOverrides,
    /// Dark variant overrides.
    #[serde(default, deserialize_with = "lenient_table")]
    pub dark: ColorOverrides,
}

/// The `[Decoration]` settings group.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DecorationSettings {
    /// Raw dark theme preference, see [DarkThemePreference::from_value].
    pub dark_theme: Option<toml::Value>,
    /// Hide the title bar while the window is maximized.
    #[serde(default, deserialize_with = "lenient")]
    pub hide_titlebar_when_maximized: Option<bool>,
    /// Palette overrides.
    #[serde(default, deserialize_with = "lenient_table")]
    pub colors: ColorSettings,
}

impl DecorationSettings {
    /// The dark theme preference, `WhenPreferred` when unset.
    pub fn dark_theme_preference(&self) -> ThemeResult<DarkThemePreference> {
        match &self.dark_theme {
            Some(value) => DarkThemePreference::from_value(value),
            None => Ok(DarkThemePreference::default()),
        }
    }

    /// Whether the title bar hides while maximized, `false` when unset.
    pub fn hide_titlebar_when_maximized(&self) -> bool {
        self.hide_titlebar_when_maximized.unwrap_or(false)
    }

    /// Overrides for the requested palette variant.
    pub fn color_overrides(&self, dark: bool) -> &ColorOverrides {
        if dark {
            &self.colors.dark
        } else {
            &self.colors.light
        }
    }

    /// Merge another settings group on top of this one, key by key.
    pub fn merge(&mut self, other: DecorationSettings) {
        if other.dark_theme.is_some() {
            self.dark_theme = other.dark_theme;
        }
        if other.hide_titlebar_when_maximized.is_some() {
            self.hide_titlebar_when_maximized = other.hide_titlebar_when_maximized;
        }
        self.colors.light.merge(other.colors.light);
        self.colors.dark.merge(other.colors.dark);
    }
}

/// A whole settings file. Groups other than `[Decoration]` are kept but unused.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    /// The decoration group.
    #[serde(default, rename = "Decoration", deserialize_with = "lenient_table")]
    pub decoration: DecorationSettings,
    /// Any other groups are captured here.
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

impl SettingsFile {
    /// Parse settings from TOML content.
    ///
    /// Only malformed TOML is an error. Keys holding a value of the wrong type are
    /// skipped with a warning and fall back to their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Loads and holds the decoration settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: DecorationSettings,
    loaded: Vec<PathBuf>,
}

impl SettingsStore {
    /// Create a store holding only built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an already parsed settings group.
    pub fn from_settings(settings: DecorationSettings) -> Self {
        Self {
            settings,
            loaded: Vec::new(),
        }
    }

    /// Create a store and load settings from the standard locations.
    pub async fn load() -> Result<Self> {
        let mut store = Self::new();
        store.load_standard_locations().await?;
        Ok(store)
    }

    /// Blocking variant of [SettingsStore::load] for hosts that construct decorations
    /// synchronously.
    pub fn load_blocking() -> Result<Self> {
        smol::block_on(Self::load())
    }

    /// Load settings from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/adw-decor/decoration.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/adw-decor/decoration.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/adw-decor/decoration.toml (XDG_CONFIG_HOME)
    /// 4. The file named by `ADW_DECOR_CONFIG`, if set
    pub async fn load_standard_locations(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(SETTINGS_PREFIX)?;

        for path in xdg_dirs.find_data_files(SETTINGS_FILE).rev() {
            self.load_logged(&path).await;
        }

        for path in xdg_dirs.find_config_files(SETTINGS_FILE).rev() {
            self.load_logged(&path).await;
        }

        let user_config_path = xdg_dirs.get_config_home().join(SETTINGS_FILE);
        if user_config_path.exists() && !self.loaded.contains(&user_config_path) {
            self.load_logged(&user_config_path).await;
        }

        if let Ok(explicit) = std::env::var(SETTINGS_ENV) {
            self.load_logged(Path::new(&explicit)).await;
        }

        Ok(())
    }

    /// Load a single settings file and merge it on top of the current settings.
    pub async fn load_file(&mut self, path: &Path) -> ThemeResult<()> {
        let content = smol::fs::read_to_string(path)
            .await
            .map_err(|e| ThemeError::ReadError(path.to_path_buf(), e))?;
        let file = SettingsFile::from_toml(&content)
            .map_err(|e| ThemeError::parse_error(path, e.to_string()))?;

        self.settings.merge(file.decoration);
        self.loaded.push(path.to_path_buf());
        Ok(())
    }

    async fn load_logged(&mut self, path: &Path) {
        log::info!("Loading decoration settings from: {:?}", path);
        if let Err(e) = self.load_file(path).await {
            log::warn!("{}", e);
        }
    }

    /// The current decoration settings.
    pub fn decoration(&self) -> &DecorationSettings {
        &self.settings
    }

    /// Files merged into the current settings, in load order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded
    }
}
