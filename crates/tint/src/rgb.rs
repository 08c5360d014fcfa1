//! RGB, hex and HSL conversions plus WCAG luminance.
//!
//! These are the numeric building blocks of adaptive coloring. Only the
//! six-digit `#rrggbb` hex form is accepted; short forms are rejected.

use std::fmt;

use crate::error::ColorError;

/// An 8-bit-per-channel sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in HSL space.
///
/// `h` is in degrees (`0.0..360.0`), `s` and `l` are fractions in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parses a six-digit hex color. The leading `#` is optional.
///
/// # Examples
///
/// ```
/// use tint::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#ef4444").unwrap(), Rgb::new(239, 68, 68));
/// assert!(hex_to_rgb("#f00").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Formats an RGB triple as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Converts RGB to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

/// Converts HSL back to RGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let h = hsl.h.rem_euclid(360.0) / 360.0;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// WCAG relative luminance of an sRGB color, in `0.0..=1.0`.
pub fn luminance(rgb: Rgb) -> f64 {
    let r = srgb_to_linear(rgb.r);
    let g = srgb_to_linear(rgb.g);
    let b = srgb_to_linear(rgb.b);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_accepts_both_cases() {
        assert_eq!(hex_to_rgb("#FF5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(hex_to_rgb("ff5733").unwrap(), Rgb::new(255, 87, 51));
    }

    #[test]
    fn hex_parse_rejects_short_and_garbage() {
        assert!(hex_to_rgb("#abc").is_err());
        assert!(hex_to_rgb("#gg0000").is_err());
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#ééé").is_err());
        assert!(hex_to_rgb("#+12345").is_err());
    }

    #[test]
    fn hex_format_is_lowercase() {
        assert_eq!(rgb_to_hex(Rgb::new(0xEF, 0x44, 0x44)), "#ef4444");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn hsl_primaries() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 1.0);
        assert_eq!(red.l, 0.5);

        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert_eq!(blue.h, 240.0);

        assert_eq!(
            hsl_to_rgb(Hsl {
                h: 120.0,
                s: 1.0,
                l: 0.5
            }),
            Rgb::new(0, 255, 0)
        );
    }

    #[test]
    fn hsl_grayscale_has_no_saturation() {
        let gray = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(gray.s, 0.0);
        assert_eq!(hsl_to_rgb(gray), Rgb::new(128, 128, 128));
    }

    #[test]
    fn luminance_bounds() {
        assert_eq!(luminance(Rgb::new(0, 0, 0)), 0.0);
        assert!((luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_of_red_500() {
        let l = luminance(Rgb::new(0xef, 0x44, 0x44));
        assert!(l > 0.2 && l < 0.25, "got {}", l);
    }
}
