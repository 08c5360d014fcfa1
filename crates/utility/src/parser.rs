//! Utility token parser.
//!
//! Tokens are folded left to right into a [`StructuredStyle`]; a later token
//! overwrites an earlier one for the same field, so `font-bold font-normal`
//! is not bold. Unknown tokens are no-ops.

use crate::color::{is_bracketed_color, parse_color_value};
use crate::scale;
use crate::style::{Decorations, StructuredStyle, TextTransform};

/// `text-*` utilities that are neither colors nor sizes.
const TEXT_NON_COLOR: &[&str] = &[
    "left", "center", "right", "justify", "start", "end", "wrap", "nowrap", "balance", "pretty",
    "ellipsis", "clip",
];

/// `bg-*` utilities that are not colors.
const BG_NON_COLOR: &[&str] = &[
    "fixed",
    "local",
    "scroll",
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
    "auto",
    "cover",
    "contain",
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "none",
];

const BG_NON_COLOR_PREFIXES: &[&str] = &["clip-", "origin-", "gradient-", "blend-", "left-", "right-"];

/// Parses a whitespace-separated token string.
///
/// # Examples
///
/// ```
/// use utility::parse;
///
/// let style = parse("font-bold text-red-500 uppercase");
/// assert!(style.font.unwrap().bold());
/// assert_eq!(style.fg.unwrap().to_string(), "#ef4444");
///
/// // Later tokens win.
/// assert!(!parse("font-bold font-normal").decorations().contains(utility::Decorations::BOLD));
/// ```
pub fn parse(tokens: &str) -> StructuredStyle {
    let mut style = StructuredStyle::new();
    for token in tokens.split_whitespace() {
        if !apply_token(&mut style, token) {
            log::trace!("ignoring unrecognized utility token: {}", token);
        }
    }
    style
}

/// Applies one token to `style`. Returns false if the token was not recognized.
pub fn apply_token(style: &mut StructuredStyle, token: &str) -> bool {
    if let Some((flag, on)) = decoration(token) {
        style.font_mut().decorations.set(flag, on);
        return true;
    }

    if let Some(transform) = transform(token) {
        style.font_mut().transform = transform;
        return true;
    }

    if let Some(level) = token.strip_prefix("opacity-") {
        return apply_opacity(style, level);
    }

    if let Some(value) = token.strip_prefix("text-") {
        return apply_text(style, value);
    }

    if let Some(value) = token.strip_prefix("bg-") {
        return apply_bg(style, value);
    }

    apply_padding(style, token)
}

fn decoration(token: &str) -> Option<(Decorations, bool)> {
    let change = match token {
        "font-bold" | "bold" | "font-semibold" | "font-medium" => (Decorations::BOLD, true),
        "font-normal" => (Decorations::BOLD, false),
        "font-light" | "font-thin" | "font-extralight" => (Decorations::FAINT, true),
        "italic" | "font-italic" => (Decorations::ITALIC, true),
        "not-italic" => (Decorations::ITALIC, false),
        "underline" => (Decorations::UNDERLINE, true),
        "no-underline" => (Decorations::UNDERLINE, false),
        "line-through" | "strikethrough" => (Decorations::STRIKETHROUGH, true),
        "no-line-through" => (Decorations::STRIKETHROUGH, false),
        _ => return None,
    };
    Some(change)
}

fn transform(token: &str) -> Option<TextTransform> {
    match token {
        "uppercase" => Some(TextTransform::Uppercase),
        "lowercase" => Some(TextTransform::Lowercase),
        "capitalize" => Some(TextTransform::Capitalize),
        "normal-case" => Some(TextTransform::None),
        _ => None,
    }
}

// Opacity has no alpha channel here; anything below 100 reads as faint.
fn apply_opacity(style: &mut StructuredStyle, level: &str) -> bool {
    match level.parse::<u8>() {
        Ok(100) => style.font_mut().decorations.remove(Decorations::FAINT),
        Ok(n) if n < 100 => style.font_mut().decorations.insert(Decorations::FAINT),
        _ => return false,
    }
    true
}

fn apply_text(style: &mut StructuredStyle, value: &str) -> bool {
    if let Some(size) = scale::font_size(value) {
        style.font_mut().size = Some(size);
        return true;
    }

    if TEXT_NON_COLOR.contains(&value) {
        return false;
    }

    if value.starts_with('[') && !is_bracketed_color(value) {
        return match scale::bracketed_length(value) {
            Some(size) => {
                style.font_mut().size = Some(size);
                true
            }
            None => false,
        };
    }

    if value.is_empty() {
        return false;
    }

    style.fg = Some(parse_color_value(value));
    true
}

fn apply_bg(style: &mut StructuredStyle, value: &str) -> bool {
    if value.is_empty()
        || BG_NON_COLOR.contains(&value)
        || BG_NON_COLOR_PREFIXES.iter().any(|p| value.starts_with(p))
    {
        return false;
    }

    style.bg = Some(parse_color_value(value));
    true
}

fn apply_padding(style: &mut StructuredStyle, token: &str) -> bool {
    let Some((side, key)) = token.split_once('-') else {
        return false;
    };
    if !matches!(side, "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl") {
        return false;
    }
    let Some(value) = scale::spacing(key) else {
        return false;
    };

    let padding = style.padding_mut();
    match side {
        "p" => {
            padding.top = value;
            padding.right = value;
            padding.bottom = value;
            padding.left = value;
        }
        "px" => {
            padding.left = value;
            padding.right = value;
        }
        "py" => {
            padding.top = value;
            padding.bottom = value;
        }
        "pt" => padding.top = value,
        "pr" => padding.right = value,
        "pb" => padding.bottom = value,
        _ => padding.left = value,
    }
    true
}
