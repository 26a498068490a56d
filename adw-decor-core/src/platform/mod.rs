// SPDX-License-Identifier: LGPL-3.0-only

//! Windowing backend selection.
//!
//! At startup the host asks the [IntegrationPlugin] for an integration. With a Wayland
//! display available it gets the host's Wayland integration wrapped in an
//! [AdwaitaIntegration]; otherwise the host's fallback factory builds an X11
//! integration from the process arguments.

/// Backing stores and the full-damage wrapper.
pub mod backing_store;

/// Environment capture and integration configuration.
pub mod environment;

/// The integration factory and its host-facing traits.
pub mod integration;

/// Damage regions.
pub mod region;

pub use backing_store::{BackingStore, FullDamageBackingStore};
pub use environment::{Backend, IntegrationConfig, PlatformEnvironment, WaylandOptions};
pub use integration::{
    AdwaitaIntegration, FallbackFactory, IntegrationPlugin, PlatformIntegration, PlatformTheme,
    ThemeFactory, WaylandBackend, WindowId,
};
pub use region::Region;
