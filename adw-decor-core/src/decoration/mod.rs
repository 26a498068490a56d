// SPDX-License-Identifier: LGPL-3.0-only

//! The Adwaita client-side decoration.
//!
//! A [Decoration] draws the title bar and frame border around a host window and turns
//! pointer and touch input over them into window-management requests. It is created
//! once per window (see [DecorationPlugin]) and driven by the host's paint and input
//! dispatch.

use vello::kurbo::{Rect, Size};

use adw_decor_theme::hints::{ThemeHints, TitlebarButtons};
use adw_decor_theme::palette::{Palette, Variant};
use adw_decor_theme::settings::DecorationSettings;
use adw_decor_theme::ThemeResult;

use crate::host::{WindowHost, WindowStates};
use crate::icon::{ButtonPixmaps, IconResolver};
use crate::input::{LeftButtonEdge, MouseButtons};
use crate::vgi::TitleText;

/// Frame margins and button geometry.
pub mod layout;

/// Title bar and border painting.
mod paint;

/// Pointer and touch routing.
mod pointer;

/// Button, hover and click state machines.
pub mod state;

use layout::{ButtonLayout, Margins};
use state::{Button, ClickState, HoverState, LastClick};

/// Decoration keys this crate provides.
pub const DECORATION_KEYS: [&str; 2] = ["adwaita", "gnome"];

/// Client-side window decoration in the Adwaita style.
pub struct Decoration {
    hints: Box<dyn ThemeHints>,
    palette: Palette,
    pixmaps: ButtonPixmaps,
    hide_titlebar_when_maximized: bool,
    titlebar_hidden: bool,
    hover: HoverState,
    click: ClickState,
    mouse_buttons: MouseButtons,
    last_click: Option<LastClick>,
    title: TitleText,
}

impl Decoration {
    /// Create a decoration.
    ///
    /// The palette and button icons are resolved here, once: the dark variant is used
    /// when the persisted preference says so, either always or following
    /// [ThemeHints::prefers_dark].
    ///
    /// Fails with [ThemeError::UnknownDarkThemePreference](adw_decor_theme::ThemeError::UnknownDarkThemePreference)
    /// if the persisted preference is not recognized.
    pub fn new(
        hints: Box<dyn ThemeHints>,
        settings: &DecorationSettings,
        icons: &dyn IconResolver,
    ) -> ThemeResult<Self> {
        let preference = settings.dark_theme_preference()?;
        let dark = preference.use_dark(hints.prefers_dark());
        log::debug!("Dark theme preference {:?} resolved to dark={}", preference, dark);

        let variant = Variant::from_dark(dark);
        let palette = Palette::resolve(variant, settings.color_overrides(dark));
        let pixmaps = ButtonPixmaps::resolve(icons, &hints.icon_theme_name(), dark);

        Ok(Self {
            hints,
            palette,
            pixmaps,
            hide_titlebar_when_maximized: settings.hide_titlebar_when_maximized(),
            titlebar_hidden: false,
            hover: HoverState::default(),
            click: ClickState::default(),
            mouse_buttons: MouseButtons::empty(),
            last_click: None,
            title: TitleText::new(),
        })
    }

    /// The colors this decoration paints with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The theme hints this decoration was created with.
    pub fn hints(&self) -> &dyn ThemeHints {
        self.hints.as_ref()
    }

    /// Space reserved around the window contents.
    ///
    /// Zero on all sides while the title bar is hidden, the fixed inset otherwise.
    pub fn margins(&self, host: &dyn WindowHost) -> Margins {
        if self.titlebar_hidden(host) {
            Margins::NONE
        } else {
            Margins::DECORATED
        }
    }

    /// Whether the title bar is hidden: the window is maximized and the
    /// hide-when-maximized setting is on.
    pub fn titlebar_hidden(&self, host: &dyn WindowHost) -> bool {
        self.hide_titlebar_when_maximized && host.window_states().contains(WindowStates::MAXIMIZED)
    }

    /// Track changes of [titlebar_hidden](Self::titlebar_hidden), asking the host to
    /// re-apply its configuration when the margins change.
    pub fn update_titlebar_hidden_state(&mut self, host: &mut dyn WindowHost) {
        let hidden = self.titlebar_hidden(host);
        if hidden != self.titlebar_hidden {
            log::debug!("Title bar {}", if hidden { "hidden" } else { "shown" });
            self.titlebar_hidden = hidden;
            host.apply_configure_when_possible();
        }
    }

    /// Full size of the decorated surface: the window contents plus margins.
    pub fn frame_size(&self, host: &dyn WindowHost) -> Size {
        let margins = self.margins(host);
        let size = host.size();
        Size::new(
            size.width + margins.left + margins.right,
            size.height + margins.top + margins.bottom,
        )
    }

    fn button_layout(&self, host: &dyn WindowHost) -> ButtonLayout {
        ButtonLayout::compute(
            self.frame_size(host).width,
            self.margins(host),
            self.hints.button_placement(),
            self.hints.titlebar_buttons(),
        )
    }

    /// Bounds of the close button.
    pub fn close_button_rect(&self, host: &dyn WindowHost) -> Rect {
        self.button_layout(host).close
    }

    /// Bounds of the maximize/restore button.
    pub fn maximize_button_rect(&self, host: &dyn WindowHost) -> Rect {
        self.button_layout(host).maximize
    }

    /// Bounds of the minimize button.
    pub fn minimize_button_rect(&self, host: &dyn WindowHost) -> Rect {
        self.button_layout(host).minimize
    }

    fn button_enabled(&self, button: TitlebarButtons) -> bool {
        self.hints.titlebar_buttons().contains(button)
    }

    /// Whether `button` is hovered. [Button::Restore] shares the maximize slot.
    pub fn is_hovered(&self, button: Button) -> bool {
        match button {
            Button::Restore => self.hover.is_hovered(Button::Maximize),
            _ => self.hover.is_hovered(button),
        }
    }

    /// The current hover state.
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    /// Mark `hovered` as the only hovered button, or clear hover with `None`.
    ///
    /// Returns whether the hover state changed, in which case the host is asked to
    /// re-apply its configuration so the frame gets repainted.
    pub fn update_button_hover_state(
        &mut self,
        host: &mut dyn WindowHost,
        hovered: Option<Button>,
    ) -> bool {
        let (next, changed) = self.hover.transition(hovered);
        self.hover = next;
        if changed {
            log::debug!("Button hover changed to {:?}", next);
            host.apply_configure_when_possible();
        }
        changed
    }

    /// Feed the button state of a pointer event over `candidate` to the click detector.
    ///
    /// Returns `true` when the left button is released over the same button it was
    /// pressed on. The pressed state is cleared by every release.
    pub fn click_button(&mut self, buttons: MouseButtons, candidate: Button) -> bool {
        let edge = LeftButtonEdge::between(self.mouse_buttons, buttons);
        let (next, clicked) = self.click.transition(edge, candidate);
        self.click = next;
        clicked
    }
}

/// Creates decorations by key.
pub struct DecorationPlugin;

impl DecorationPlugin {
    /// The decoration keys this plugin answers to.
    pub fn keys() -> &'static [&'static str] {
        &DECORATION_KEYS
    }

    /// Create the decoration registered under `key` (case-insensitive).
    ///
    /// Returns `None` for unknown keys.
    ///
    /// # Panics
    ///
    /// Panics if the persisted dark theme preference is not recognized. The settings
    /// are corrupt and no decoration can be built from them.
    pub fn create(
        key: &str,
        hints: Box<dyn ThemeHints>,
        settings: &DecorationSettings,
        icons: &dyn IconResolver,
    ) -> Option<Decoration> {
        let key = key.to_lowercase();
        if !DECORATION_KEYS.contains(&key.as_str()) {
            log::debug!("No decoration registered for key '{}'", key);
            return None;
        }

        match Decoration::new(hints, settings, icons) {
            Ok(decoration) => Some(decoration),
            Err(e) => {
                log::error!("Cannot create '{}' decoration: {}", key, e);
                panic!("invalid decoration settings: {}", e);
            },
        }
    }
}
