// SPDX-License-Identifier: LGPL-3.0-only

//! Button identity, hover and click tracking.

use std::time::{Duration, Instant};

use vello::kurbo::Point;

use crate::input::LeftButtonEdge;

/// A titlebar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Close the window.
    Close,
    /// Maximize the window.
    Maximize,
    /// Minimize the window.
    Minimize,
    /// Restore a maximized window. Shares the maximize slot.
    Restore,
}

impl Button {
    /// Icon theme name of the button glyph.
    pub fn icon_name(self) -> &'static str {
        match self {
            Button::Close => "window-close",
            Button::Maximize => "window-maximize",
            Button::Minimize => "window-minimize",
            Button::Restore => "window-restore",
        }
    }
}

/// Which button, if any, the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No button is hovered.
    #[default]
    NoHover,
    /// The pointer is over this button.
    Hovered(Button),
}

impl HoverState {
    /// Move to the state for `hovered`, returning the new state and whether anything changed.
    pub fn transition(self, hovered: Option<Button>) -> (HoverState, bool) {
        let next = match hovered {
            Some(button) => HoverState::Hovered(button),
            None => HoverState::NoHover,
        };
        (next, next != self)
    }

    /// Whether `button` is the hovered one.
    pub fn is_hovered(self, button: Button) -> bool {
        self == HoverState::Hovered(button)
    }
}

/// Press/release tracking of a single titlebar button.
///
/// A click is only reported when the left button is released over the same button it
/// was pressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickState {
    /// Nothing is pressed.
    #[default]
    Idle,
    /// The left button went down over this button.
    Pressed(Button),
}

impl ClickState {
    /// Feed a left-button edge observed over `candidate`.
    ///
    /// Returns the new state and whether a click on `candidate` completed.
    pub fn transition(self, edge: LeftButtonEdge, candidate: Button) -> (ClickState, bool) {
        match edge {
            LeftButtonEdge::Pressed => (ClickState::Pressed(candidate), false),
            LeftButtonEdge::Released => {
                (ClickState::Idle, self == ClickState::Pressed(candidate))
            },
            LeftButtonEdge::Unchanged => (self, false),
        }
    }
}

/// A completed click in the drag region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastClick {
    /// When the click completed.
    pub time: Instant,
    /// Where the click completed, in surface coordinates.
    pub position: Point,
}

impl LastClick {
    /// Whether a click at `time` and `position` forms a double click with this one.
    ///
    /// The distance tolerance is a square: each axis is compared on its own.
    pub fn is_double_click(
        &self,
        time: Instant,
        position: Point,
        interval: Duration,
        distance: i32,
    ) -> bool {
        let distance = f64::from(distance);
        time.saturating_duration_since(self.time) <= interval
            && (position.x - self.position.x).abs() <= distance
            && (position.y - self.position.y).abs() <= distance
    }
}
