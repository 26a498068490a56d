// SPDX-License-Identifier: LGPL-3.0-only

//! Color parsing and HSL adjustment helpers.
//!
//! The adjustment helpers mirror the Adwaita stylesheet functions of the same
//! name. Each one shifts a single HSL channel by `amount` and saturates at zero,
//! leaving the other channels untouched.

use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// A color in HSL space with all channels normalized to `0.0..=1.0`.
///
/// Hue is a fraction of a full turn. Achromatic colors report a hue of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue, fraction of a full turn.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
    /// Alpha.
    pub a: f64,
}

impl Hsla {
    /// Convert an sRGB color to HSL.
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.components.map(|c| c as f64);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta <= f64::EPSILON {
            return Self { h: 0.0, s: 0.0, l, a };
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let h = sector / 6.0;

        Self { h, s, l, a }
    }

    /// Convert back to an sRGB color.
    pub fn to_color(self) -> Color {
        let Self { h, s, l, a } = self;
        if s <= f64::EPSILON {
            return Color::new([l as f32, l as f32, l as f32, a as f32]);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let r = hue_to_channel(p, q, h + 1.0 / 3.0);
        let g = hue_to_channel(p, q, h);
        let b = hue_to_channel(p, q, h - 1.0 / 3.0);

        Color::new([r as f32, g as f32, b as f32, a as f32])
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Lower the alpha channel by `amount`, saturating at fully transparent.
pub fn transparentize(color: Color, amount: f64) -> Color {
    let mut hsl = Hsla::from_color(color);
    hsl.a = (hsl.a - amount).max(0.0);
    hsl.to_color()
}

/// Lower the lightness by `amount`, saturating at black.
pub fn darken(color: Color, amount: f64) -> Color {
    let mut hsl = Hsla::from_color(color);
    hsl.l = (hsl.l - amount).max(0.0);
    hsl.to_color()
}

/// Lower the saturation by `amount`, saturating at grey.
pub fn desaturate(color: Color, amount: f64) -> Color {
    let mut hsl = Hsla::from_color(color);
    hsl.s = (hsl.s - amount).max(0.0);
    hsl.to_color()
}

/// Parse a color value as found in settings files.
///
/// Supports `#rrggbb`, `#rrggbbaa` and the names `black`, `white` and `transparent`.
pub fn parse_color(value: &str) -> ThemeResult<Color> {
    match value.trim().to_ascii_lowercase().as_str() {
        "black" => return Ok(Color::BLACK),
        "white" => return Ok(Color::WHITE),
        "transparent" => return Ok(Color::TRANSPARENT),
        _ => {},
    }

    let hex = value.trim().trim_start_matches('#');
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidColor(value.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| ThemeError::InvalidColor(value.to_string()))
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ThemeError::InvalidColor(format!(
            "Hex color must be 6 or 8 characters: {}",
            value
        ))),
    }
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.components.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn test_hsl_roundtrip_chromatic() {
        let color = Color::from_rgb8(0x3d, 0x38, 0x46);
        let back = Hsla::from_color(color).to_color();
        for i in 0..4 {
            assert!(close(color.components[i], back.components[i]));
        }
    }

    #[test]
    fn test_transparentize_saturates_at_zero() {
        let color = transparentize(Color::BLACK, 0.77);
        assert!(close(color.components[3], 0.23));

        let gone = transparentize(Color::from_rgba8(0, 0, 0, 51), 0.5);
        assert_eq!(gone.components[3], 0.0);
    }

    #[test]
    fn test_darken_saturates_at_black() {
        let color = darken(Color::from_rgb8(0x10, 0x10, 0x10), 0.5);
        assert_eq!(to_hex(color), "#000000");
    }

    #[test]
    fn test_darken_keeps_hue_and_alpha() {
        let source = Color::from_rgba8(0xf6, 0xf5, 0xf4, 0x80);
        let darker = darken(source, 0.18);
        let before = Hsla::from_color(source);
        let after = Hsla::from_color(darker);
        assert!((before.l - after.l - 0.18).abs() < 0.01);
        assert!(close(darker.components[3], source.components[3]));
    }

    #[test]
    fn test_desaturate_fully_gives_grey() {
        let grey = desaturate(Color::from_rgb8(0x3d, 0x38, 0x46), 1.0);
        let [r, g, b, _] = grey.components;
        assert!(close(r, g) && close(g, b));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(to_hex(parse_color("#2e3436").unwrap()), "#2e3436");
        assert_eq!(to_hex(parse_color("#0000003b").unwrap()), "#0000003b");
        assert_eq!(to_hex(parse_color("black").unwrap()), "#000000");
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#zz3436").is_err());
    }

    #[test]
    fn test_parse_color_rejects_signs() {
        assert!(matches!(parse_color("#+1+2+3"), Err(ThemeError::InvalidColor(_))));
        assert!(parse_color("#-1ffffff").is_err());
        assert!(parse_color("# 12345").is_err());
    }
}
