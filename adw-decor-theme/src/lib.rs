// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! # adw-decor theming
//!
//! Everything the decoration needs to know about how it should look:
//!
//! - **[Palette](palette::Palette)**: title bar, border and button colors for the light and dark variants
//! - **[color]**: HSL adjustment helpers (`transparentize`, `darken`, `desaturate`) and color parsing
//! - **[ThemeHints](hints::ThemeHints)**: desktop-derived values such as the dark preference,
//!   button layout, title font and double-click thresholds
//! - **[SettingsStore](settings::SettingsStore)**: persisted `[Decoration]` settings loaded from the XDG directories
//!
//! ## Quick Start
//!
//! ```rust
//! use adw_decor_theme::hints::{StaticHints, ThemeHints};
//! use adw_decor_theme::palette::{Palette, Variant};
//! use adw_decor_theme::settings::SettingsStore;
//!
//! let hints = StaticHints::new().with_dark(true);
//! let settings = SettingsStore::new();
//! let decoration = settings.decoration();
//!
//! let dark = decoration
//!     .dark_theme_preference()
//!     .unwrap()
//!     .use_dark(hints.prefers_dark());
//! let palette = Palette::resolve(Variant::from_dark(dark), decoration.color_overrides(dark));
//! assert!(palette.variant.is_dark());
//! ```
//!
//! ## Environment Variables
//!
//! - `ADW_DECOR_CONFIG`: path to an extra settings file, loaded after the XDG locations
//! - `GTK_THEME`: read by [StaticHints::from_env](hints::StaticHints::from_env); a `:dark` suffix selects the dark preference

/// HSL color helpers and color parsing.
pub mod color;

/// Theme and settings errors.
pub mod error;

/// Desktop theme hints.
pub mod hints;

/// Decoration palette.
pub mod palette;

/// Persisted decoration settings.
pub mod settings;

pub use error::{ThemeError, ThemeResult};
