// SPDX-License-Identifier: LGPL-3.0-only

use vello::kurbo::Point;

use adw_decor_theme::hints::TitlebarButtons;

use super::state::{Button, LastClick};
use super::Decoration;
use crate::host::{CursorShape, Edges, WindowHost, WindowStates};
use crate::input::{LeftButtonEdge, MouseButtons, PointerEvent, TouchEvent, TouchPointState};

/// Region of the decorated surface a pointer position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerZone {
    /// The title bar strip, including the top resize edge.
    Top,
    /// The bottom border.
    Bottom,
    /// The left border.
    Left,
    /// The right border.
    Right,
    /// The window contents.
    Interior,
}

fn toggled_maximized(states: WindowStates) -> WindowStates {
    if states.contains(WindowStates::MAXIMIZED) {
        states - WindowStates::MAXIMIZED
    } else {
        states | WindowStates::MAXIMIZED
    }
}

impl Decoration {
    /// Classify `local` into a [PointerZone].
    pub fn zone_at(&self, host: &dyn WindowHost, local: Point) -> PointerZone {
        let margins = self.margins(host);
        let size = host.size();

        if local.y <= margins.top {
            PointerZone::Top
        } else if local.y >= size.height + margins.top {
            PointerZone::Bottom
        } else if local.x <= margins.left {
            PointerZone::Left
        } else if local.x >= size.width + margins.left {
            PointerZone::Right
        } else {
            PointerZone::Interior
        }
    }

    /// Route a pointer event.
    ///
    /// Returns `false` only when the pointer is over the window contents, so the host
    /// delivers the event to the application instead.
    pub fn handle_mouse(&mut self, host: &mut dyn WindowHost, event: &PointerEvent) -> bool {
        if event.local.y > self.margins(host).top {
            self.update_button_hover_state(host, None);
        }

        let consumed = match self.zone_at(host, event.local) {
            PointerZone::Top => {
                self.process_mouse_top(host, event);
                true
            },
            PointerZone::Bottom => {
                self.process_mouse_bottom(host, event);
                true
            },
            PointerZone::Left => {
                self.process_mouse_left(host, event);
                true
            },
            PointerZone::Right => {
                self.process_mouse_right(host, event);
                true
            },
            PointerZone::Interior => {
                host.restore_cursor(event.device);
                false
            },
        };

        self.mouse_buttons = event.buttons;
        consumed
    }

    /// Route a touch event. Only touch-down is acted on.
    pub fn handle_touch(&mut self, host: &mut dyn WindowHost, event: &TouchEvent) -> bool {
        if event.state != TouchPointState::Pressed {
            return false;
        }

        let local = event.local;
        if self.close_button_rect(host).contains(local) {
            host.request_close();
        } else if self.button_enabled(TitlebarButtons::MAXIMIZE)
            && self.maximize_button_rect(host).contains(local)
        {
            let states = host.window_states();
            host.set_window_states(toggled_maximized(states));
        } else if self.button_enabled(TitlebarButtons::MINIMIZE)
            && self.minimize_button_rect(host).contains(local)
        {
            host.set_window_states(WindowStates::MINIMIZED);
        } else if local.y <= self.margins(host).top {
            log::debug!("Touch move started");
            host.start_move(event.device);
        } else {
            return false;
        }
        true
    }

    /// Handle the title bar strip: top resize edges, buttons and the drag region.
    pub fn process_mouse_top(&mut self, host: &mut dyn WindowHost, event: &PointerEvent) {
        let margins = self.margins(host);
        let size = host.size();
        let local = event.local;

        let close = self.close_button_rect(host);
        let maximize = self.maximize_button_rect(host);
        let minimize = self.minimize_button_rect(host);

        if !close.contains(local) && !maximize.contains(local) && !minimize.contains(local) {
            self.update_button_hover_state(host, None);
        }

        if local.y <= margins.bottom {
            if local.x <= margins.left {
                host.set_cursor(event.device, CursorShape::SizeFDiag);
                self.start_resize(host, event, Edges::TOP | Edges::LEFT);
            } else if local.x > size.width + margins.left {
                host.set_cursor(event.device, CursorShape::SizeBDiag);
                self.start_resize(host, event, Edges::TOP | Edges::RIGHT);
            } else {
                host.set_cursor(event.device, CursorShape::SplitV);
                self.start_resize(host, event, Edges::TOP);
            }
        } else if local.x <= margins.left {
            self.process_mouse_left(host, event);
        } else if local.x > size.width + margins.left {
            self.process_mouse_right(host, event);
        } else if close.contains(local) {
            self.update_button_hover_state(host, Some(Button::Close));
            if self.click_button(event.buttons, Button::Close) {
                host.request_close();
            }
        } else if self.button_enabled(TitlebarButtons::MAXIMIZE) && maximize.contains(local) {
            self.update_button_hover_state(host, Some(Button::Maximize));
            if self.click_button(event.buttons, Button::Maximize) {
                let states = host.window_states();
                host.set_window_states(toggled_maximized(states));
            }
        } else if self.button_enabled(TitlebarButtons::MINIMIZE) && minimize.contains(local) {
            self.update_button_hover_state(host, Some(Button::Minimize));
            if self.click_button(event.buttons, Button::Minimize) {
                host.set_window_states(WindowStates::MINIMIZED);
            }
        } else if self.click_button(event.buttons, Button::Maximize) {
            self.complete_drag_region_click(host, event);
        } else {
            host.restore_cursor(event.device);
            self.start_move(host, event);
        }
    }

    /// Handle the bottom border: bottom corners and edge.
    pub fn process_mouse_bottom(&mut self, host: &mut dyn WindowHost, event: &PointerEvent) {
        let margins = self.margins(host);
        let size = host.size();
        let local = event.local;

        if local.x <= margins.left {
            host.set_cursor(event.device, CursorShape::SizeBDiag);
            self.start_resize(host, event, Edges::BOTTOM | Edges::LEFT);
        } else if local.x > size.width + margins.right {
            host.set_cursor(event.device, CursorShape::SizeFDiag);
            self.start_resize(host, event, Edges::BOTTOM | Edges::RIGHT);
        } else {
            host.set_cursor(event.device, CursorShape::SplitV);
            self.start_resize(host, event, Edges::BOTTOM);
        }
    }

    /// Handle the left border.
    pub fn process_mouse_left(&mut self, host: &mut dyn WindowHost, event: &PointerEvent) {
        host.set_cursor(event.device, CursorShape::SplitH);
        self.start_resize(host, event, Edges::LEFT);
    }

    /// Handle the right border.
    pub fn process_mouse_right(&mut self, host: &mut dyn WindowHost, event: &PointerEvent) {
        host.set_cursor(event.device, CursorShape::SplitH);
        self.start_resize(host, event, Edges::RIGHT);
    }

    /// A left release completed a press in the drag region.
    fn complete_drag_region_click(&mut self, host: &mut dyn WindowHost, event: &PointerEvent) {
        let is_double_click = self.last_click.is_some_and(|last| {
            last.is_double_click(
                event.time,
                event.local,
                self.hints.double_click_interval(),
                self.hints.double_click_distance(),
            )
        });

        if is_double_click {
            log::debug!("Double click on title bar, toggling maximized");
            let states = host.window_states();
            host.set_window_states(toggled_maximized(states));
        }

        self.last_click = Some(LastClick {
            time: event.time,
            position: event.local,
        });
    }

    fn left_pressed(&self, buttons: MouseButtons) -> bool {
        LeftButtonEdge::between(self.mouse_buttons, buttons) == LeftButtonEdge::Pressed
    }

    fn start_resize(&self, host: &mut dyn WindowHost, event: &PointerEvent, edges: Edges) {
        if self.left_pressed(event.buttons) {
            log::debug!("Resize started ({:?})", edges);
            host.start_resize(event.device, edges);
        }
    }

    fn start_move(&self, host: &mut dyn WindowHost, event: &PointerEvent) {
        if self.left_pressed(event.buttons) {
            log::debug!("Move started");
            host.start_move(event.device);
        }
    }
}
