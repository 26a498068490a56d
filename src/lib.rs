#![warn(missing_docs)]

//! Adwaita-styled client-side window decorations for Wayland toolkits.
//!
//! ```rust
//! use adw_decor::prelude::*;
//!
//! let settings = SettingsStore::new();
//! let decoration = DecorationPlugin::create(
//!     "adwaita",
//!     Box::new(StaticHints::new()),
//!     settings.decoration(),
//!     &NoIcons,
//! );
//! assert!(decoration.is_some());
//! ```

pub use vello::peniko as color;

pub use adw_decor_core as core;
pub use adw_decor_theme as theme;

/// A "prelude" for hosts embedding the decoration.
///
/// ```rust
/// use adw_decor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::decoration::layout::Margins;
    pub use crate::core::decoration::state::Button;
    pub use crate::core::decoration::{Decoration, DecorationPlugin};
    pub use crate::core::host::{CursorShape, DeviceId, Edges, WindowHost, WindowStates};
    #[cfg(feature = "xdg-icons")]
    pub use crate::core::icon::XdgIconResolver;
    pub use crate::core::icon::{IconResolver, NoIcons};
    pub use crate::core::input::{MouseButtons, PointerEvent, TouchEvent, TouchPointState};
    pub use crate::core::platform::{
        BackingStore, IntegrationConfig, IntegrationPlugin, PlatformEnvironment,
        PlatformIntegration, Region,
    };
    pub use crate::core::vgi::{Graphics, TextPainter, VelloGraphics};

    pub use crate::theme::hints::{ButtonPlacement, FontSpec, StaticHints, ThemeHints, TitlebarButtons};
    pub use crate::theme::palette::{Palette, Variant};
    pub use crate::theme::settings::{DarkThemePreference, SettingsStore};

    pub use crate::core::vg::kurbo::{Point, Rect, Size};
}
