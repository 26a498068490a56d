// SPDX-License-Identifier: LGPL-3.0-only

//! Decoration palette.
//!
//! The palette is computed once, when a decoration is created, from the built-in
//! Adwaita defaults of the selected variant and the color overrides found in the
//! settings.

use vello::peniko::Color;

use crate::color::{darken, desaturate, parse_color, transparentize};
use crate::settings::{ColorOverrides, ColorSlot};

/// Light or dark palette variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Light variant.
    #[default]
    Light,
    /// Dark variant.
    Dark,
}

impl Variant {
    /// Select the variant for a resolved dark-theme decision.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Variant::Dark
        } else {
            Variant::Light
        }
    }

    /// Whether this is the dark variant.
    pub fn is_dark(self) -> bool {
        self == Variant::Dark
    }
}

/// Colors used to paint the decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Variant the palette was built for.
    pub variant: Variant,
    /// Title text of the active window.
    pub foreground: Color,
    /// Title bar gradient start (bottom) of the active window.
    pub background_start: Color,
    /// Title bar gradient end (top) of the active window.
    pub background_end: Color,
    /// Title text of inactive windows.
    pub foreground_inactive: Color,
    /// Title bar fill of inactive windows.
    pub background_inactive: Color,
    /// Frame border of the active window.
    pub border: Color,
    /// Frame border of inactive windows.
    pub border_inactive: Color,
    /// Hovered button fill.
    pub button_hover: Color,
    /// Hovered button outline.
    pub button_hover_border: Color,
}

impl Palette {
    /// Build the palette for `variant`, applying `overrides` on top of the defaults.
    ///
    /// Overrides that fail to parse are ignored with a warning. The default hover
    /// outline is derived from the resolved hover fill, so overriding only the fill
    /// also shifts the outline.
    pub fn resolve(variant: Variant, overrides: &ColorOverrides) -> Self {
        let pick = |slot: ColorSlot, default: Color| -> Color {
            match overrides.get(slot) {
                Some(raw) => parse_color(raw).unwrap_or_else(|e| {
                    log::warn!("Ignoring color override {}: {}", slot.key(), e);
                    default
                }),
                None => default,
            }
        };

        match variant {
            Variant::Light => {
                let button_hover = pick(ColorSlot::ButtonHover, Color::from_rgb8(0xf6, 0xf5, 0xf4));
                Self {
                    variant,
                    foreground: pick(ColorSlot::Foreground, Color::from_rgb8(0x2e, 0x34, 0x36)),
                    background_start: pick(
                        ColorSlot::BackgroundStart,
                        Color::from_rgb8(0xda, 0xd6, 0xd2),
                    ),
                    background_end: pick(ColorSlot::BackgroundEnd, Color::from_rgb8(0xe1, 0xde, 0xdb)),
                    foreground_inactive: pick(
                        ColorSlot::ForegroundInactive,
                        Color::from_rgb8(0x92, 0x95, 0x95),
                    ),
                    background_inactive: pick(
                        ColorSlot::BackgroundInactive,
                        Color::from_rgb8(0xf6, 0xf5, 0xf4),
                    ),
                    border: pick(ColorSlot::Border, transparentize(Color::BLACK, 0.77)),
                    border_inactive: pick(
                        ColorSlot::BorderInactive,
                        transparentize(Color::BLACK, 0.82),
                    ),
                    button_hover,
                    button_hover_border: pick(ColorSlot::ButtonHoverBorder, darken(button_hover, 0.18)),
                }
            },
            Variant::Dark => {
                let button_hover = pick(
                    ColorSlot::ButtonHover,
                    darken(desaturate(Color::from_rgb8(0x3d, 0x38, 0x46), 1.0), 0.04),
                );
                Self {
                    variant,
                    foreground: pick(ColorSlot::Foreground, Color::from_rgb8(0xee, 0xee, 0xec)),
                    background_start: pick(
                        ColorSlot::BackgroundStart,
                        Color::from_rgb8(0x26, 0x26, 0x26),
                    ),
                    background_end: pick(ColorSlot::BackgroundEnd, Color::from_rgb8(0x2b, 0x2b, 0x2b)),
                    foreground_inactive: pick(
                        ColorSlot::ForegroundInactive,
                        Color::from_rgb8(0x91, 0x91, 0x90),
                    ),
                    background_inactive: pick(
                        ColorSlot::BackgroundInactive,
                        Color::from_rgb8(0x35, 0x35, 0x35),
                    ),
                    border: pick(
                        ColorSlot::Border,
                        transparentize(Color::from_rgb8(0x1b, 0x1b, 0x1b), 0.1),
                    ),
                    border_inactive: pick(
                        ColorSlot::BorderInactive,
                        transparentize(Color::from_rgb8(0x1b, 0x1b, 0x1b), 0.1),
                    ),
                    button_hover,
                    button_hover_border: pick(ColorSlot::ButtonHoverBorder, darken(button_hover, 0.1)),
                }
            },
        }
    }

    /// Built-in light palette.
    pub fn light() -> Self {
        Self::resolve(Variant::Light, &ColorOverrides::default())
    }

    /// Built-in dark palette.
    pub fn dark() -> Self {
        Self::resolve(Variant::Dark, &ColorOverrides::default())
    }

    /// Border color for the given activation state.
    pub fn border_for(&self, active: bool) -> Color {
        if active {
            self.border
        } else {
            self.border_inactive
        }
    }

    /// Title text color for the given activation state.
    pub fn foreground_for(&self, active: bool) -> Color {
        if active {
            self.foreground
        } else {
            self.foreground_inactive
        }
    }

    /// Title bar gradient stops `(start, end)` for the given activation state.
    pub fn background_for(&self, active: bool) -> (Color, Color) {
        if active {
            (self.background_start, self.background_end)
        } else {
            (self.background_inactive, self.background_inactive)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
