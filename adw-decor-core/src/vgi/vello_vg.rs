// SPDX-License-Identifier: LGPL-3.0-only

use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Fill, ImageBrush, Mix};
use vello::Scene;

use crate::vgi::Graphics;

/// A Vello-based implementation of the [Graphics] trait.
pub struct VelloGraphics<'a> {
    scene: &'a mut Scene,
}

impl<'a> VelloGraphics<'a> {
    /// Create a new VelloGraphics from a Scene reference.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }
}

impl<'a> Graphics for VelloGraphics<'a> {
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.fill(fill_rule, transform, brush, brush_transform, shape);
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.stroke(style, transform, brush, brush_transform, shape);
    }

    fn draw_image(&mut self, image: &ImageBrush, transform: Affine) {
        self.scene.draw_image(image, transform);
    }

    fn push_layer(&mut self, mix: Mix, alpha: f32, transform: Affine, shape: &BezPath) {
        self.scene.push_layer(mix, alpha, transform, shape);
    }

    fn pop_layer(&mut self) {
        self.scene.pop_layer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::kurbo::{Rect, Shape};
    use vello::peniko::Color;

    #[test]
    fn test_draws_into_scene() {
        let mut scene = Scene::new();
        assert!(scene.encoding().is_empty());

        let clip = Rect::new(0.0, 0.0, 2.0, 2.0).to_path(0.1);
        let mut graphics = VelloGraphics::new(&mut scene);
        graphics.push_layer(Mix::Clip, 1.0, Affine::IDENTITY, &clip);
        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(Color::BLACK),
            None,
            &Rect::new(0.0, 0.0, 4.0, 4.0).to_path(0.1),
        );
        graphics.pop_layer();

        assert!(!scene.encoding().is_empty());
    }
}
