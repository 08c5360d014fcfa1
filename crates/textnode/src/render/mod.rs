//! Rendering a text node tree into one of four encodings.
//!
//! Every format renders a node as
//!
//! ```text
//! wrap(transform(content)) + render(child_1) + render(child_2) + ...
//! ```
//!
//! and differs only in `wrap`. Children never inherit their parent's style
//! and are never placed inside the parent's wrapper. The wrapper is emitted
//! even around empty content, so a styled group renders its empty markup
//! ahead of its children.

mod ansi;
mod html;
mod markdown;

use tint::BackgroundCache;
use tint::background;

use crate::node::TextNode;
use crate::resolve::{ResolvedStyle, resolve, resolve_unadapted};

/// An output encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Content only, no markup.
    Plain,
    /// SGR escape sequences with 24-bit color.
    Ansi,
    /// Markdown emphasis with inline HTML for colors.
    Markdown,
    /// Semantic tags inside a classed, inline-styled `<span>`.
    Html,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Plain, Format::Ansi, Format::Markdown, Format::Html];

    /// Renders `node` using the process-wide background cache.
    pub fn render(self, node: &TextNode) -> String {
        self.render_with(node, background::global())
    }

    /// Renders `node`, adapting token colors against `background`.
    pub fn render_with(self, node: &TextNode, background: &BackgroundCache) -> String {
        let mut out = String::new();
        self.render_into(node, background, &mut out);
        out
    }

    fn render_into(self, node: &TextNode, background: &BackgroundCache, out: &mut String) {
        let resolved = match self {
            Format::Plain => resolve_unadapted(node),
            _ => resolve(node, background),
        };

        let text = resolved.style.transform().apply(&node.content);
        out.push_str(&self.wrap_span(&text, &resolved));

        for child in &node.children {
            self.render_into(child, background, out);
        }
    }

    /// Wraps one node's already-transformed text in this format's markup.
    pub fn wrap_span(self, text: &str, resolved: &ResolvedStyle) -> String {
        match self {
            Format::Plain => text.to_string(),
            Format::Ansi => ansi::wrap(text, &resolved.style),
            Format::Markdown => markdown::wrap(text, &resolved.style),
            Format::Html => html::wrap(text, resolved),
        }
    }

    /// Parses a format name (`plain`, `ansi`, `markdown`/`md`, `html`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Some(Format::Plain),
            "ansi" | "terminal" => Some(Format::Ansi),
            "markdown" | "md" => Some(Format::Markdown),
            "html" => Some(Format::Html),
            _ => None,
        }
    }
}

/// Renders with [`Format::Plain`].
pub fn render_plain(node: &TextNode) -> String {
    Format::Plain.render(node)
}

/// Renders with [`Format::Ansi`].
pub fn render_ansi(node: &TextNode) -> String {
    Format::Ansi.render(node)
}

/// Renders with [`Format::Markdown`].
pub fn render_markdown(node: &TextNode) -> String {
    Format::Markdown.render(node)
}

/// Renders with [`Format::Html`].
pub fn render_html(node: &TextNode) -> String {
    Format::Html.render(node)
}

/// Escapes text for HTML element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a rem-equivalent length for CSS.
pub(crate) fn rem(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}rem", value)
    }
}
