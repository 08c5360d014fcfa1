//! Background-aware recoloring.
//!
//! Colors too dark to read on a dark terminal are lifted, colors too light
//! for a light terminal are pulled down. Everything inside the luminance band
//! `[DARK_THRESHOLD, LIGHT_THRESHOLD]` passes through untouched.

use crate::color::Color;
use crate::rgb::{Hsl, Rgb, hsl_to_rgb, luminance, rgb_to_hsl};

/// Below this luminance a color is lifted on dark backgrounds.
pub const DARK_THRESHOLD: f64 = 0.15;
/// Above this luminance a color is darkened on light backgrounds.
pub const LIGHT_THRESHOLD: f64 = 0.85;
/// Fraction of the distance toward the target lightness covered in one step.
pub const BLEND: f64 = 0.8;

const DARK_TARGET: f64 = 0.75;
const DARK_FLOOR: f64 = 0.6;
const DARK_SATURATION: f64 = 0.9;

const LIGHT_TARGET: f64 = 0.25;
const LIGHT_CEILING: f64 = 0.4;
const LIGHT_SATURATION: f64 = 1.1;

// One channel step of HSL lightness; absorbs u8 rounding after a lift.
const LIGHTNESS_EPSILON: f64 = 1.0 / 255.0;

/// Adapts `color` for contrast against the given background.
///
/// Sentinels and literal colors are returned unchanged, and opacity is
/// preserved.
///
/// ```
/// use tint::{adapt, Color, Rgb};
///
/// let red = Color::Rgb(Rgb::new(0xef, 0x44, 0x44));
/// assert_eq!(adapt(&red, true), red);
///
/// let black = Color::Rgb(Rgb::new(0, 0, 0));
/// assert_ne!(adapt(&black, true), black);
/// ```
pub fn adapt(color: &Color, is_dark_background: bool) -> Color {
    match color {
        Color::Rgb(rgb) => Color::Rgb(adapt_rgb(*rgb, is_dark_background)),
        Color::Rgba(rgb, a) => Color::Rgba(adapt_rgb(*rgb, is_dark_background), *a),
        Color::Transparent | Color::CurrentColor | Color::Literal(_) => color.clone(),
    }
}

/// Adapts a bare RGB triple. See [`adapt`].
pub fn adapt_rgb(rgb: Rgb, is_dark_background: bool) -> Rgb {
    let lum = luminance(rgb);

    if is_dark_background && lum < DARK_THRESHOLD {
        let hsl = rgb_to_hsl(rgb);
        // Saturated blues can sit below the luminance threshold even at the
        // lifted lightness; leave those where a previous lift put them.
        if hsl.l >= DARK_FLOOR - LIGHTNESS_EPSILON {
            return rgb;
        }
        let l = (hsl.l + (DARK_TARGET - hsl.l) * BLEND).max(DARK_FLOOR);
        let s = hsl.s * DARK_SATURATION;
        log::trace!("adapt {} for dark background: l {:.3} -> {:.3}", rgb, hsl.l, l);
        return hsl_to_rgb(Hsl { h: hsl.h, s, l });
    }

    if !is_dark_background && lum > LIGHT_THRESHOLD {
        let hsl = rgb_to_hsl(rgb);
        let l = (hsl.l + (LIGHT_TARGET - hsl.l) * BLEND).min(LIGHT_CEILING);
        let s = (hsl.s * LIGHT_SATURATION).min(1.0);
        log::trace!("adapt {} for light background: l {:.3} -> {:.3}", rgb, hsl.l, l);
        return hsl_to_rgb(Hsl { h: hsl.h, s, l });
    }

    rgb
}
