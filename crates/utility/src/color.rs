//! Color token values: the part after `text-` or `bg-`.
//!
//! Supports palette entries (`red-500`), bare families (`red`, shade 500),
//! arbitrary values (`[#112233]`), keywords (`black`, `white`,
//! `transparent`, `current`) and an opacity suffix (`red-500/50`). Anything
//! unresolvable becomes a [`Color::Literal`] rather than an error.

use tint::palette::{self, DEFAULT_SHADE};
use tint::{Color, Rgb};

/// Resolves a color value such as `red-500`, `[#ff0000]/25` or `sky`.
///
/// # Examples
///
/// ```
/// use utility::color::parse_color_value;
/// use tint::{Color, Rgb};
///
/// assert_eq!(parse_color_value("red-500"), Color::Rgb(Rgb::new(0xef, 0x44, 0x44)));
/// assert_eq!(parse_color_value("red"), parse_color_value("red-500"));
/// assert_eq!(parse_color_value("unknown-500"), Color::Literal("unknown-500".into()));
/// ```
pub fn parse_color_value(value: &str) -> Color {
    let (base, opacity) = split_opacity(value);
    let color = parse_base(base);

    match opacity {
        Some(percent) => match color.clone().with_opacity_percent(percent) {
            Ok(c) => c,
            Err(err) => {
                log::trace!("ignoring opacity suffix on {}: {}", value, err);
                color
            }
        },
        None => color,
    }
}

fn split_opacity(value: &str) -> (&str, Option<&str>) {
    // A slash inside brackets belongs to the arbitrary value.
    if value.starts_with('[') && value.ends_with(']') {
        return (value, None);
    }
    match value.rsplit_once('/') {
        Some((base, percent)) if !base.is_empty() => (base, Some(percent)),
        _ => (value, None),
    }
}

fn parse_base(base: &str) -> Color {
    if let Some(inner) = base.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return Color::parse(inner);
    }

    match base {
        "black" => return Color::Rgb(Rgb::new(0, 0, 0)),
        "white" => return Color::Rgb(Rgb::new(255, 255, 255)),
        "transparent" => return Color::Transparent,
        "current" => return Color::CurrentColor,
        _ => {}
    }

    let (family, shade) = match base.rsplit_once('-') {
        Some((family, shade)) if palette::is_family(family) => (family, shade),
        _ => (base, DEFAULT_SHADE),
    };

    palette::lookup(family, shade)
        .map(Color::Rgb)
        .unwrap_or_else(|| Color::Literal(base.to_string()))
}

/// Returns true if a bracketed value is an arbitrary color rather than a length.
pub(crate) fn is_bracketed_color(value: &str) -> bool {
    value
        .strip_prefix('[')
        .is_some_and(|inner| inner.starts_with('#') || inner.contains('('))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_and_default_shade() {
        assert_eq!(parse_color_value("blue-900"), Color::Rgb(Rgb::new(0x1e, 0x3a, 0x8a)));
        assert_eq!(parse_color_value("emerald"), Color::Rgb(Rgb::new(0x10, 0xb9, 0x81)));
    }

    #[test]
    fn unknown_shade_is_literal() {
        assert_eq!(parse_color_value("red-450"), Color::Literal("red-450".into()));
        assert_eq!(parse_color_value("rebeccapurple"), Color::Literal("rebeccapurple".into()));
    }

    #[test]
    fn brackets() {
        assert_eq!(parse_color_value("[#112233]"), Color::Rgb(Rgb::new(0x11, 0x22, 0x33)));
        assert_eq!(parse_color_value("[#abc]"), Color::Literal("#abc".into()));
        assert_eq!(
            parse_color_value("[rgb(1,2,3)]"),
            Color::Literal("rgb(1,2,3)".into())
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(parse_color_value("transparent"), Color::Transparent);
        assert_eq!(parse_color_value("current"), Color::CurrentColor);
        assert_eq!(parse_color_value("white"), Color::Rgb(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn opacity_suffix() {
        assert_eq!(
            parse_color_value("red-500/50"),
            Color::Rgba(Rgb::new(0xef, 0x44, 0x44), 0.5)
        );
        assert_eq!(
            parse_color_value("red-500/300"),
            Color::Rgb(Rgb::new(0xef, 0x44, 0x44))
        );
        assert_eq!(parse_color_value("transparent/50"), Color::Transparent);
    }

    #[test]
    fn bracket_kind() {
        assert!(is_bracketed_color("[#fff]"));
        assert!(is_bracketed_color("[rgb(0,0,0)]"));
        assert!(!is_bracketed_color("[12px]"));
        assert!(!is_bracketed_color("red"));
    }
}
