// SPDX-License-Identifier: LGPL-3.0-only

//! Vector Graphics Interface abstraction.
//!
//! The decoration paints through the [Graphics] trait instead of a concrete renderer, so
//! hosts can hand it a Vello scene ([VelloGraphics]) or any other backend, and tests can
//! record the draw calls.

use vello::kurbo::{Affine, BezPath, Point, Shape, Size, Stroke};
use vello::peniko::{Brush, Color, Fill, ImageBrush, Mix};

use adw_decor_theme::hints::FontSpec;

/// A trait for rendering vector graphics.
///
/// Note: Methods use `&BezPath` for object-safety. To use concrete shape types
/// (Rect, RoundedRect, etc.), convert them with [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Draw an image with its top-left corner mapped through `transform`.
    fn draw_image(&mut self, image: &ImageBrush, transform: Affine);

    /// Push a new layer with the given blend mode and transform.
    ///
    /// A layer pushed with [Mix::Clip] clips everything drawn until the matching
    /// [pop_layer](Graphics::pop_layer) to `shape`.
    fn push_layer(&mut self, mix: Mix, alpha: f32, transform: Affine, shape: &BezPath);

    /// Pop the most recent layer.
    fn pop_layer(&mut self);
}

/// Helper function to convert a shape to BezPath for use with Graphics trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// Shapes and draws single-line text.
///
/// Implemented by the host on top of its own font stack.
pub trait TextPainter {
    /// Size of `text` laid out on one line in `font`.
    fn measure(&mut self, text: &str, font: &FontSpec) -> Size;

    /// Draw `text` with its layout box's top-left corner at `origin`.
    fn draw(
        &mut self,
        graphics: &mut dyn Graphics,
        text: &str,
        font: &FontSpec,
        origin: Point,
        color: Color,
    );
}

/// A default graphics implementation using Vello.
pub mod vello_vg;

/// Window title layout cache.
pub mod title;

pub use title::TitleText;
pub use vello_vg::VelloGraphics;
