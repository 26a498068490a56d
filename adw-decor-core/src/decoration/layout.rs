// SPDX-License-Identifier: LGPL-3.0-only

//! Frame margins and titlebar button geometry.

use vello::kurbo::Rect;

use adw_decor_theme::hints::{ButtonPlacement, TitlebarButtons};

/// Width (and height) of a titlebar button.
pub const BUTTON_WIDTH: f64 = 26.0;
/// Gap between adjacent buttons.
pub const BUTTON_SPACING: f64 = 8.0;
/// Gap between the outermost button and the frame edge.
pub const BUTTON_MARGINS: f64 = 6.0;

/// Space the decoration reserves around the window contents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    /// Left edge.
    pub left: f64,
    /// Top edge, including the title bar.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Margins {
    /// Margins of a visible title bar.
    pub const DECORATED: Margins = Margins::new(1.0, 38.0, 1.0, 1.0);

    /// No margins at all, used while the title bar is hidden.
    pub const NONE: Margins = Margins::new(0.0, 0.0, 0.0, 0.0);

    /// Create margins from the four edges.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Where the three titlebar buttons sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    /// Close button.
    pub close: Rect,
    /// Maximize/restore button.
    pub maximize: Rect,
    /// Minimize button.
    pub minimize: Rect,
}

impl ButtonLayout {
    /// Lay the buttons out in a frame `frame_width` wide with `margins`.
    ///
    /// Close is always the outermost button. Maximize follows it, and minimize takes
    /// the maximize slot when maximize is disabled.
    pub fn compute(
        frame_width: f64,
        margins: Margins,
        placement: ButtonPlacement,
        buttons: TitlebarButtons,
    ) -> Self {
        let y = (margins.top - BUTTON_WIDTH) / 2.0;
        let slot = |index: f64| -> Rect {
            let x = match placement {
                ButtonPlacement::Left => BUTTON_MARGINS + index * (BUTTON_WIDTH + BUTTON_SPACING),
                ButtonPlacement::Right => {
                    frame_width - BUTTON_WIDTH - BUTTON_MARGINS - index * (BUTTON_WIDTH + BUTTON_SPACING)
                },
            };
            Rect::from_origin_size((x, y), (BUTTON_WIDTH, BUTTON_WIDTH))
        };

        let minimize_index = if buttons.contains(TitlebarButtons::MAXIMIZE) {
            2.0
        } else {
            1.0
        };

        Self {
            close: slot(0.0),
            maximize: slot(1.0),
            minimize: slot(minimize_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_placement() {
        let layout = ButtonLayout::compute(
            802.0,
            Margins::DECORATED,
            ButtonPlacement::Right,
            TitlebarButtons::all(),
        );
        assert_eq!(layout.close, Rect::new(770.0, 6.0, 796.0, 32.0));
        assert_eq!(layout.maximize.x0, 736.0);
        assert_eq!(layout.minimize.x0, 702.0);
    }

    #[test]
    fn test_left_placement() {
        let layout = ButtonLayout::compute(
            802.0,
            Margins::DECORATED,
            ButtonPlacement::Left,
            TitlebarButtons::all(),
        );
        assert_eq!(layout.close.x0, 6.0);
        assert_eq!(layout.maximize.x0, 40.0);
        assert_eq!(layout.minimize.x0, 74.0);
    }

    #[test]
    fn test_minimize_takes_maximize_slot() {
        let layout = ButtonLayout::compute(
            802.0,
            Margins::DECORATED,
            ButtonPlacement::Right,
            TitlebarButtons::CLOSE | TitlebarButtons::MINIMIZE,
        );
        assert_eq!(layout.minimize, layout.maximize);
    }
}
