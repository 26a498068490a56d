// SPDX-License-Identifier: LGPL-3.0-only

//! Pointer and touch events delivered to the decoration.

use std::time::Instant;

use bitflags::bitflags;
use vello::kurbo::Point;

use crate::host::DeviceId;

bitflags! {
    /// Mouse buttons held down.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Primary button.
        const LEFT = 0b001;
        /// Secondary button.
        const RIGHT = 0b010;
        /// Middle button.
        const MIDDLE = 0b100;
    }
}

bitflags! {
    /// Keyboard modifiers held during an event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Control.
        const CONTROL = 0b0010;
        /// Alt.
        const ALT = 0b0100;
        /// Super/Logo.
        const LOGO = 0b1000;
    }
}

/// Change of the left button between two consecutive pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftButtonEdge {
    /// Left went from released to held.
    Pressed,
    /// Left went from held to released.
    Released,
    /// No change of the left button.
    Unchanged,
}

impl LeftButtonEdge {
    /// Compare the previous and current button state.
    pub fn between(previous: MouseButtons, current: MouseButtons) -> Self {
        let was = previous.contains(MouseButtons::LEFT);
        let is = current.contains(MouseButtons::LEFT);
        match (was, is) {
            (false, true) => LeftButtonEdge::Pressed,
            (true, false) => LeftButtonEdge::Released,
            _ => LeftButtonEdge::Unchanged,
        }
    }
}

/// A pointer event over the decorated surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Device the event came from.
    pub device: DeviceId,
    /// Position relative to the decorated surface (margins included).
    pub local: Point,
    /// Position in global coordinates.
    pub global: Point,
    /// Buttons held after this event.
    pub buttons: MouseButtons,
    /// Modifiers held during this event.
    pub modifiers: Modifiers,
    /// When the event happened.
    pub time: Instant,
}

impl PointerEvent {
    /// Create an event at `local` with no buttons held, stamped now.
    pub fn new(local: impl Into<Point>) -> Self {
        let local = local.into();
        Self {
            device: DeviceId::default(),
            local,
            global: local,
            buttons: MouseButtons::empty(),
            modifiers: Modifiers::empty(),
            time: Instant::now(),
        }
    }

    /// Set the held buttons.
    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Set the event time.
    pub fn at(mut self, time: Instant) -> Self {
        self.time = time;
        self
    }

    /// Set the originating device.
    pub fn with_device(mut self, device: DeviceId) -> Self {
        self.device = device;
        self
    }
}

/// State of a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPointState {
    /// The point touched down.
    Pressed,
    /// The point moved.
    Moved,
    /// The point did not move.
    Stationary,
    /// The point was lifted.
    Released,
}

/// A touch event over the decorated surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Device the event came from.
    pub device: DeviceId,
    /// Position relative to the decorated surface (margins included).
    pub local: Point,
    /// Position in global coordinates.
    pub global: Point,
    /// State of the touch point.
    pub state: TouchPointState,
    /// Modifiers held during this event.
    pub modifiers: Modifiers,
}

impl TouchEvent {
    /// Create a touch event at `local`.
    pub fn new(local: impl Into<Point>, state: TouchPointState) -> Self {
        let local = local.into();
        Self {
            device: DeviceId::default(),
            local,
            global: local,
            state,
            modifiers: Modifiers::empty(),
        }
    }
}
