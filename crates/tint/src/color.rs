//! The color value carried by styles.
//!
//! A [`Color`] is either a concrete RGB value (optionally with opacity), one
//! of the CSS sentinels `transparent` / `currentColor`, or a literal string
//! that could not be resolved and is passed through to renderers that accept
//! raw CSS colors.

use std::fmt;

use crate::error::ColorError;
use crate::rgb::{Rgb, hex_to_rgb};

/// A resolved color.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// An opaque color, written `#rrggbb`.
    Rgb(Rgb),
    /// A color with opacity in `0.0..=1.0`.
    Rgba(Rgb, f32),
    /// The `transparent` keyword.
    Transparent,
    /// The `currentColor` keyword.
    CurrentColor,
    /// An unresolved color string, emitted verbatim where raw CSS is allowed.
    Literal(String),
}

impl Color {
    /// Interprets a CSS-ish color string. Never fails.
    ///
    /// - `#rrggbb` becomes [`Color::Rgb`]
    /// - `transparent` and `currentColor` become the sentinels
    /// - anything else is kept as a [`Color::Literal`]
    ///
    /// ```
    /// use tint::{Color, Rgb};
    ///
    /// assert_eq!(Color::parse("#112233"), Color::Rgb(Rgb::new(0x11, 0x22, 0x33)));
    /// assert_eq!(Color::parse("currentColor"), Color::CurrentColor);
    /// assert_eq!(Color::parse("#abc"), Color::Literal("#abc".into()));
    /// ```
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("transparent") {
            return Color::Transparent;
        }
        if input.eq_ignore_ascii_case("currentcolor") {
            return Color::CurrentColor;
        }
        match hex_to_rgb(input) {
            Ok(rgb) if input.starts_with('#') => Color::Rgb(rgb),
            _ => Color::Literal(input.to_string()),
        }
    }

    /// Returns a copy with the given opacity (`0.0..=1.0`).
    ///
    /// Sentinels and literals have no channel data and are returned as-is.
    pub fn with_opacity(self, opacity: f32) -> Self {
        match self {
            Color::Rgb(rgb) | Color::Rgba(rgb, _) => Color::Rgba(rgb, opacity.clamp(0.0, 1.0)),
            other => other,
        }
    }

    /// Returns a copy with opacity given as a whole percentage (`"50"` -> 0.5).
    pub fn with_opacity_percent(self, percent: &str) -> Result<Self, ColorError> {
        let value: u8 = percent
            .parse()
            .map_err(|_| ColorError::InvalidOpacity(percent.to_string()))?;
        if value > 100 {
            return Err(ColorError::InvalidOpacity(percent.to_string()));
        }
        Ok(self.with_opacity(value as f32 / 100.0))
    }

    /// The RGB channels, if this color has any.
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            Color::Rgb(rgb) | Color::Rgba(rgb, _) => Some(*rgb),
            _ => None,
        }
    }

    /// The opacity, if one was specified.
    pub fn opacity(&self) -> Option<f32> {
        match self {
            Color::Rgba(_, a) => Some(*a),
            _ => None,
        }
    }

    /// Returns true for `transparent` and `currentColor`.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Color::Transparent | Color::CurrentColor)
    }

    /// Formats the color for a CSS declaration value.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => write!(f, "{}", rgb),
            Color::Rgba(rgb, a) => write!(f, "rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, a),
            Color::Transparent => f.write_str("transparent"),
            Color::CurrentColor => f.write_str("currentColor"),
            Color::Literal(s) => f.write_str(s),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}
