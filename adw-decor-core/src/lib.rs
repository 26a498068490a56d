// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! # adw-decor core
//!
//! The decoration renderer and the platform integration factory.
//!
//! - **[Decoration](decoration::Decoration)**: paints the Adwaita title bar and border and turns
//!   pointer and touch input into move, resize and button actions on a [WindowHost](host::WindowHost)
//! - **[IntegrationPlugin](platform::IntegrationPlugin)**: picks the Wayland or fallback backend at startup
//! - **[vgi]**: the drawing surface abstraction, with a Vello implementation
//! - **[icon]**: titlebar icon resolution
//!
//! The host toolkit implements the collaborator traits ([WindowHost](host::WindowHost),
//! [TextPainter](vgi::TextPainter), [IconResolver](icon::IconResolver) and the backend
//! factories) and drives the decoration from its event loop.

/// Client-side decoration.
pub mod decoration;

/// Integration errors.
pub mod error;

/// The decorated host window.
pub mod host;

/// Titlebar icons.
pub mod icon;

/// Input events.
pub mod input;

/// Platform integration.
pub mod platform;

/// Vector Graphics Interface.
pub mod vgi;

/// Exports the `vello` crate for drawing.
pub use vello as vg;

pub use error::{IntegrationError, IntegrationResult};
