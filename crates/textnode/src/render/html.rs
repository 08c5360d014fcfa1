//! HTML rendering.
//!
//! Decorations become semantic tags with `<u>` innermost, then `<em>`,
//! `<strong>` and `<s>`. The result goes into a `<span>` carrying the source
//! tokens as `class` and every CSS-expressible property as inline `style`.

use utility::{Decorations, Padding, StructuredStyle};

use super::{escape_html, rem};
use crate::resolve::ResolvedStyle;

/// Tags, innermost first.
const TAGS: [(Decorations, &str); 4] = [
    (Decorations::UNDERLINE, "u"),
    (Decorations::ITALIC, "em"),
    (Decorations::BOLD, "strong"),
    (Decorations::STRIKETHROUGH, "s"),
];

pub(crate) fn wrap(text: &str, resolved: &ResolvedStyle) -> String {
    let style = &resolved.style;
    let decorations = style.decorations();

    let mut body = escape_html(text);
    for (_, tag) in TAGS.iter().filter(|(flag, _)| decorations.contains(*flag)) {
        body = format!("<{tag}>{body}</{tag}>");
    }

    let mut attrs = String::new();
    if let Some(class) = &resolved.class {
        attrs.push_str(&format!(" class=\"{}\"", escape_html(class)));
    }
    let declarations = css_declarations(style);
    if !declarations.is_empty() {
        attrs.push_str(&format!(" style=\"{}\"", escape_html(&declarations.join("; "))));
    }

    if attrs.is_empty() {
        body
    } else {
        format!("<span{attrs}>{body}</span>")
    }
}

fn css_declarations(style: &StructuredStyle) -> Vec<String> {
    let mut declarations = Vec::new();
    if let Some(fg) = &style.fg {
        declarations.push(format!("color:{}", fg));
    }
    if let Some(bg) = &style.bg {
        declarations.push(format!("background-color:{}", bg));
    }
    if let Some(size) = style.font.and_then(|f| f.size) {
        declarations.push(format!("font-size:{}", rem(size)));
    }
    if let Some(padding) = style.padding.filter(|p| !p.is_empty()) {
        declarations.push(format!("padding:{}", padding_value(&padding)));
    }
    if style.decorations().contains(Decorations::FAINT) {
        declarations.push("opacity:0.6".to_string());
    }
    declarations
}

fn padding_value(p: &Padding) -> String {
    format!(
        "{} {} {} {}",
        rem(p.top),
        rem(p.right),
        rem(p.bottom),
        rem(p.left)
    )
}
