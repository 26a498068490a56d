// SPDX-License-Identifier: LGPL-3.0-only

use vello::kurbo::{Affine, BezPath, Point, Rect, RoundedRect, Shape, Stroke};
use vello::peniko::{Brush, Fill, Gradient, Mix};

use adw_decor_theme::hints::{ButtonPlacement, TitlebarButtons};

use super::layout::BUTTON_SPACING;
use super::state::Button;
use super::Decoration;
use crate::host::{WindowHost, WindowStates};
use crate::vgi::{shape_to_path, Graphics, TextPainter};

const BORDER_RADIUS: f64 = 10.0;
const TITLEBAR_RADIUS: f64 = 8.0;
const HOVER_RADIUS: f64 = 4.0;
const HOVER_SIZE: f64 = 28.0;

impl Decoration {
    /// Paint the frame: border, title bar, window title and buttons.
    ///
    /// Nothing is drawn while the title bar is hidden.
    pub fn paint(
        &mut self,
        host: &mut dyn WindowHost,
        graphics: &mut dyn Graphics,
        text: &mut dyn TextPainter,
    ) {
        self.update_titlebar_hidden_state(host);
        if self.titlebar_hidden {
            return;
        }

        let active = host.is_active();
        let maximized = host.window_states().contains(WindowStates::MAXIMIZED);
        let margins = self.margins(host);
        let frame = self.frame_size(host);
        let layout = self.button_layout(host);

        // Border
        let border_rect = Rect::new(0.0, 0.0, frame.width, margins.top + 8.0);
        let border_path = if maximized {
            shape_to_path(&border_rect)
        } else {
            shape_to_path(&RoundedRect::from_rect(border_rect, BORDER_RADIUS))
        };
        let border_brush = Brush::Solid(self.palette.border_for(active));
        graphics.fill(Fill::NonZero, Affine::IDENTITY, &border_brush, None, &border_path);

        // Title bar
        let bar_rect = Rect::from_origin_size(
            (1.0, 1.0),
            (frame.width - margins.left - margins.right, margins.top + 8.0),
        );
        let bar_path = if maximized {
            shape_to_path(&bar_rect)
        } else {
            shape_to_path(&RoundedRect::from_rect(bar_rect, TITLEBAR_RADIUS))
        };
        let (start, end) = self.palette.background_for(active);
        let gradient = Gradient::new_linear((margins.left, margins.top + 6.0), (margins.left, 1.0))
            .with_stops([(0.0, start), (1.0, end)]);
        graphics.fill(Fill::NonZero, Affine::IDENTITY, &Brush::Gradient(gradient), None, &bar_path);

        // Left, right and bottom borders
        let mut insets = BezPath::new();
        for inset in [
            Rect::from_origin_size((0.0, margins.top), (margins.left, frame.height - margins.top)),
            Rect::from_origin_size((0.0, frame.height - margins.bottom), (frame.width, margins.bottom)),
            Rect::from_origin_size(
                (frame.width - margins.right, margins.top),
                (margins.right, frame.height - margins.top),
            ),
        ] {
            insets.extend(inset.path_elements(0.1));
        }
        graphics.fill(Fill::NonZero, Affine::IDENTITY, &border_brush, None, &insets);

        // Window title
        let title = host.title();
        if !title.is_empty() {
            let font = self.hints.titlebar_font();
            let clip = match self.hints.button_placement() {
                ButtonPlacement::Right => Rect::new(
                    margins.left,
                    0.0,
                    layout.minimize.x0 - BUTTON_SPACING,
                    margins.top,
                ),
                ButtonPlacement::Left => Rect::new(
                    layout.minimize.x1 + BUTTON_SPACING,
                    0.0,
                    frame.width - margins.right,
                    margins.top,
                ),
            };
            let size = self.title.layout(&title, &font, text);
            let origin = Point::new(
                ((frame.width - size.width) / 2.0).trunc(),
                ((margins.top - size.height) / 2.0).trunc(),
            );

            graphics.push_layer(Mix::Clip, 1.0, Affine::IDENTITY, &shape_to_path(&clip));
            text.draw(graphics, &title, &font, origin, self.palette.foreground_for(active));
            graphics.pop_layer();
        }

        // Buttons
        self.paint_button(graphics, Button::Close, layout.close, 6.0);

        if self.button_enabled(TitlebarButtons::MAXIMIZE) {
            let glyph = if maximized { Button::Restore } else { Button::Maximize };
            self.paint_button(graphics, glyph, layout.maximize, 5.0);
        }

        if self.button_enabled(TitlebarButtons::MINIMIZE) {
            self.paint_button(graphics, Button::Minimize, layout.minimize, 5.0);
        }
    }

    fn paint_button(&self, graphics: &mut dyn Graphics, button: Button, rect: Rect, icon_offset: f64) {
        if self.is_hovered(button) {
            let hover = RoundedRect::from_origin_size(
                (rect.x0 - 0.5, rect.y0 - 0.5),
                (HOVER_SIZE, HOVER_SIZE),
                HOVER_RADIUS,
            );
            let path = shape_to_path(&hover);
            graphics.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(self.palette.button_hover),
                None,
                &path,
            );
            graphics.stroke(
                &Stroke::new(1.0),
                Affine::IDENTITY,
                &Brush::Solid(self.palette.button_hover_border),
                None,
                &path,
            );
        }

        if let Some(pixmap) = self.pixmaps.get(button) {
            let transform = Affine::translate((rect.x0 + icon_offset, rect.y0 + icon_offset));
            graphics.draw_image(pixmap, transform);
        }
    }
}
