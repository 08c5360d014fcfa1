//! Terminal rendering with SGR escape sequences.
//!
//! Bold, faint, italic, underline and truecolor foreground/background share
//! one opening sequence closed by a full reset. Strikethrough is layered on
//! afterwards: over a reset-terminated base it reuses the full reset, over
//! bare text it closes with `ESC[29m`.

use tint::Color;
use utility::{Decorations, StructuredStyle};

const RESET: &str = "\x1b[0m";
const STRIKE_ON: &str = "\x1b[9m";
const STRIKE_OFF: &str = "\x1b[29m";

const ATTRIBUTES: [(Decorations, &str); 4] = [
    (Decorations::BOLD, "1"),
    (Decorations::FAINT, "2"),
    (Decorations::ITALIC, "3"),
    (Decorations::UNDERLINE, "4"),
];

pub(crate) fn wrap(text: &str, style: &StructuredStyle) -> String {
    let base = base_sequence(text, style);
    if !style.decorations().contains(Decorations::STRIKETHROUGH) {
        return base;
    }

    match base.strip_suffix(RESET) {
        Some(open) => format!("{}{}{}", STRIKE_ON, open, RESET),
        None => format!("{}{}{}", STRIKE_ON, base, STRIKE_OFF),
    }
}

fn base_sequence(text: &str, style: &StructuredStyle) -> String {
    let decorations = style.decorations();
    let mut params: Vec<String> = ATTRIBUTES
        .iter()
        .filter(|(flag, _)| decorations.contains(*flag))
        .map(|(_, code)| code.to_string())
        .collect();

    if let Some(rgb) = style.fg.as_ref().and_then(Color::rgb) {
        params.push(format!("38;2;{};{};{}", rgb.r, rgb.g, rgb.b));
    }
    if let Some(rgb) = style.bg.as_ref().and_then(Color::rgb) {
        params.push(format!("48;2;{};{};{}", rgb.r, rgb.g, rgb.b));
    }

    if params.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{}m{}{}", params.join(";"), text, RESET)
}
