//! Markdown rendering.
//!
//! Emphasis maps to `~~`, `*` and `**`; underline has no Markdown form and is
//! dropped. Colors fall back to an inline HTML `<span>`, and the emphasis
//! markers are placed around that span.

use utility::{Decorations, StructuredStyle};

use super::escape_html;

/// Marker pairs, innermost first.
const MARKERS: [(Decorations, &str); 3] = [
    (Decorations::STRIKETHROUGH, "~~"),
    (Decorations::ITALIC, "*"),
    (Decorations::BOLD, "**"),
];

pub(crate) fn wrap(text: &str, style: &StructuredStyle) -> String {
    let mut body = match color_span_style(style) {
        Some(css) => format!("<span style=\"{}\">{}</span>", escape_html(&css), text),
        None => text.to_string(),
    };

    let decorations = style.decorations();
    for (_, marker) in MARKERS.iter().filter(|(flag, _)| decorations.contains(*flag)) {
        body = format!("{marker}{body}{marker}");
    }
    body
}

fn color_span_style(style: &StructuredStyle) -> Option<String> {
    if style.fg.is_none() && style.bg.is_none() {
        return None;
    }

    let mut declarations = Vec::with_capacity(3);
    if let Some(fg) = &style.fg {
        declarations.push(format!("color: {}", fg));
    }
    if let Some(bg) = &style.bg {
        declarations.push(format!("background-color: {}", bg));
    }
    if style.decorations().contains(Decorations::FAINT) {
        declarations.push("opacity: 0.6".to_string());
    }
    Some(declarations.join("; "))
}
