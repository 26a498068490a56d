// SPDX-License-Identifier: LGPL-3.0-only

//! Desktop theme hints consumed by the decoration.
//!
//! The decoration never talks to the desktop settings backend directly. Everything it
//! needs (dark preference, icon theme, button layout, title font and double-click
//! thresholds) comes through the [ThemeHints] trait, which hosts implement on top of
//! whatever settings source they have. [StaticHints] is a plain value implementation
//! with GNOME defaults.

use std::time::Duration;

use bitflags::bitflags;

bitflags! {
    /// The titlebar buttons enabled by the desktop.
    ///
    /// The close button is always shown; the flag exists so layouts can be described
    /// completely.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TitlebarButtons: u8 {
        /// Close button.
        const CLOSE = 0b001;
        /// Maximize/restore button.
        const MAXIMIZE = 0b010;
        /// Minimize button.
        const MINIMIZE = 0b100;
    }
}

/// Which side of the title bar holds the window buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPlacement {
    /// Buttons are laid out from the left edge.
    Left,
    /// Buttons are laid out from the right edge.
    #[default]
    Right,
}

/// Title bar font as described by the desktop.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name.
    pub family: String,
    /// Size in points.
    pub point_size: f32,
    /// Whether the bold weight is used.
    pub bold: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Cantarell".to_string(),
            point_size: 11.0,
            bold: true,
        }
    }
}

/// Source of desktop-theme derived values.
///
/// Lookups are synchronous and side-effect free; the decoration may call them on
/// every paint or input event.
pub trait ThemeHints {
    /// Whether the desktop prefers a dark theme variant.
    fn prefers_dark(&self) -> bool;

    /// Name of the system icon theme.
    fn icon_theme_name(&self) -> String;

    /// Enabled titlebar buttons. Close is always implied.
    fn titlebar_buttons(&self) -> TitlebarButtons;

    /// Side of the title bar holding the buttons.
    fn button_placement(&self) -> ButtonPlacement;

    /// Font used for the window title.
    fn titlebar_font(&self) -> FontSpec;

    /// Maximum delay between two clicks forming a double click.
    fn double_click_interval(&self) -> Duration;

    /// Maximum per-axis distance in pixels between two clicks forming a double click.
    fn double_click_distance(&self) -> i32;
}

/// A [ThemeHints] implementation backed by plain values.
#[derive(Debug, Clone)]
pub struct StaticHints {
    /// Dark variant preference.
    pub prefers_dark: bool,
    /// Icon theme name.
    pub icon_theme: String,
    /// Enabled buttons.
    pub buttons: TitlebarButtons,
    /// Button side.
    pub placement: ButtonPlacement,
    /// Title font.
    pub font: FontSpec,
    /// Double-click interval.
    pub double_click_interval: Duration,
    /// Double-click distance.
    pub double_click_distance: i32,
}

impl Default for StaticHints {
    fn default() -> Self {
        Self {
            prefers_dark: false,
            icon_theme: "Adwaita".to_string(),
            buttons: TitlebarButtons::all(),
            placement: ButtonPlacement::Right,
            font: FontSpec::default(),
            double_click_interval: Duration::from_millis(400),
            double_click_distance: 5,
        }
    }
}

impl StaticHints {
    /// Create hints with GNOME defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create hints from the process environment.
    ///
    /// `GTK_THEME=<name>:dark` selects the dark preference, matching how GTK applications
    /// interpret the variable.
    pub fn from_env() -> Self {
        let mut hints = Self::default();
        if let Ok(gtk_theme) = std::env::var("GTK_THEME") {
            hints.prefers_dark = gtk_theme_is_dark(&gtk_theme);
            log::debug!("GTK_THEME={} (dark: {})", gtk_theme, hints.prefers_dark);
        }
        hints
    }

    /// Set the dark preference.
    pub fn with_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    /// Set the enabled buttons. Close is always kept.
    pub fn with_buttons(mut self, buttons: TitlebarButtons) -> Self {
        self.buttons = buttons | TitlebarButtons::CLOSE;
        self
    }

    /// Set the button placement.
    pub fn with_placement(mut self, placement: ButtonPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the double-click thresholds.
    pub fn with_double_click(mut self, interval: Duration, distance: i32) -> Self {
        self.double_click_interval = interval;
        self.double_click_distance = distance;
        self
    }

    /// Apply a GNOME `button-layout` string such as `"appmenu:minimize,maximize,close"`.
    pub fn with_button_layout(mut self, layout: &str) -> Self {
        let (buttons, placement) = parse_button_layout(layout);
        self.buttons = buttons;
        self.placement = placement;
        self
    }
}

impl ThemeHints for StaticHints {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn icon_theme_name(&self) -> String {
        self.icon_theme.clone()
    }

    fn titlebar_buttons(&self) -> TitlebarButtons {
        self.buttons | TitlebarButtons::CLOSE
    }

    fn button_placement(&self) -> ButtonPlacement {
        self.placement
    }

    fn titlebar_font(&self) -> FontSpec {
        self.font.clone()
    }

    fn double_click_interval(&self) -> Duration {
        self.double_click_interval
    }

    fn double_click_distance(&self) -> i32 {
        self.double_click_distance
    }
}

/// Parse a GNOME `button-layout` value.
///
/// Buttons listed after the colon are placed on the right, buttons before it on the
/// left. A layout naming `close` only on the left side selects left placement.
pub fn parse_button_layout(layout: &str) -> (TitlebarButtons, ButtonPlacement) {
    let (left, right) = layout.split_once(':').unwrap_or((layout, ""));

    let collect = |side: &str| {
        side.split(',')
            .map(str::trim)
            .fold(TitlebarButtons::empty(), |acc, name| match name {
                "close" => acc | TitlebarButtons::CLOSE,
                "maximize" => acc | TitlebarButtons::MAXIMIZE,
                "minimize" => acc | TitlebarButtons::MINIMIZE,
                _ => acc,
            })
    };

    let left_buttons = collect(left);
    let right_buttons = collect(right);

    let placement = if left_buttons.contains(TitlebarButtons::CLOSE)
        && !right_buttons.contains(TitlebarButtons::CLOSE)
    {
        ButtonPlacement::Left
    } else {
        ButtonPlacement::Right
    };

    (
        left_buttons | right_buttons | TitlebarButtons::CLOSE,
        placement,
    )
}

fn gtk_theme_is_dark(value: &str) -> bool {
    value
        .rsplit_once(':')
        .map(|(_, variant)| variant.eq_ignore_ascii_case("dark"))
        .unwrap_or(false)
}
