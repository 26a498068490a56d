// SPDX-License-Identifier: LGPL-3.0-only

//! The window a decoration is attached to.
//!
//! The decoration does not own any windowing state. Geometry, window states and the
//! title are read from the host window on every call, and every window-management
//! action (close, maximize, move, resize, cursor changes) is requested through it.

use bitflags::bitflags;
use vello::kurbo::Size;

bitflags! {
    /// Window state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct WindowStates: u8 {
        /// The window is minimized.
        const MINIMIZED = 0b0001;
        /// The window is maximized.
        const MAXIMIZED = 0b0010;
        /// The window is fullscreen.
        const FULLSCREEN = 0b0100;
    }
}

bitflags! {
    /// Window edges involved in an interactive resize.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Top edge.
        const TOP = 0b0001;
        /// Bottom edge.
        const BOTTOM = 0b0010;
        /// Left edge.
        const LEFT = 0b0100;
        /// Right edge.
        const RIGHT = 0b1000;
    }
}

/// Pointer cursor shapes the decoration requests over its resize zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// `↘↖` diagonal, used for the top-left and bottom-right corners.
    SizeFDiag,
    /// `↙↗` diagonal, used for the top-right and bottom-left corners.
    SizeBDiag,
    /// Vertical split, used for the top and bottom edges.
    SplitV,
    /// Horizontal split, used for the left and right edges.
    SplitH,
}

/// Identifies the input device (seat pointer or touch) an event came from.
///
/// Passed back to the host when a gesture or cursor change is requested so it can be
/// routed to the right seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceId(pub u32);

/// The host window owning a decoration.
pub trait WindowHost {
    /// Size of the window contents, without decoration margins.
    fn size(&self) -> Size;

    /// Whether the window currently has keyboard focus.
    fn is_active(&self) -> bool;

    /// Current window states.
    fn window_states(&self) -> WindowStates;

    /// Request new window states.
    fn set_window_states(&mut self, states: WindowStates);

    /// Current window title.
    fn title(&self) -> String;

    /// Request the window to close.
    fn request_close(&mut self);

    /// Begin an interactive move driven by `device`.
    fn start_move(&mut self, device: DeviceId);

    /// Begin an interactive resize of `edges` driven by `device`.
    fn start_resize(&mut self, device: DeviceId, edges: Edges);

    /// Show `cursor` for `device` while it is over the decoration.
    fn set_cursor(&mut self, device: DeviceId, cursor: CursorShape);

    /// Restore the application's cursor for `device`.
    fn restore_cursor(&mut self, device: DeviceId);

    /// Ask the host to re-apply the window configuration on its next opportunity,
    /// so changed margins or hover regions take effect.
    fn apply_configure_when_possible(&mut self);
}
