// SPDX-License-Identifier: LGPL-3.0-only

use vello::kurbo::Size;

use adw_decor_theme::hints::FontSpec;

use crate::vgi::TextPainter;

/// Caches the measured layout of the window title.
///
/// Titles rarely change between frames, so the layout is only measured again when
/// the text or the font differs from the previous paint.
#[derive(Debug, Clone, Default)]
pub struct TitleText {
    text: String,
    font: Option<FontSpec>,
    size: Size,
}

impl TitleText {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of `text` in `font`, measured with `painter` only if it changed.
    pub fn layout(&mut self, text: &str, font: &FontSpec, painter: &mut dyn TextPainter) -> Size {
        if self.text != text || self.font.as_ref() != Some(font) {
            self.size = painter.measure(text, font);
            self.text.clear();
            self.text.push_str(text);
            self.font = Some(font.clone());
        }
        self.size
    }

    /// The title text last laid out.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vgi::Graphics;
    use vello::kurbo::Point;
    use vello::peniko::Color;

    #[derive(Default)]
    struct CountingPainter {
        measured: usize,
    }

    impl TextPainter for CountingPainter {
        fn measure(&mut self, text: &str, _font: &FontSpec) -> Size {
            self.measured += 1;
            Size::new(text.len() as f64 * 7.0, 16.0)
        }

        fn draw(&mut self, _: &mut dyn Graphics, _: &str, _: &FontSpec, _: Point, _: Color) {}
    }

    #[test]
    fn test_measures_only_on_change() {
        let mut painter = CountingPainter::default();
        let mut title = TitleText::new();
        let font = FontSpec::default();

        assert_eq!(title.layout("Files", &font, &mut painter), Size::new(35.0, 16.0));
        title.layout("Files", &font, &mut painter);
        assert_eq!(painter.measured, 1);

        title.layout("Files - Home", &font, &mut painter);
        assert_eq!(painter.measured, 2);
        assert_eq!(title.text(), "Files - Home");

        let bigger = FontSpec {
            point_size: 14.0,
            ..FontSpec::default()
        };
        title.layout("Files - Home", &bigger, &mut painter);
        assert_eq!(painter.measured, 3);
    }
}
