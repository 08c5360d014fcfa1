//! Per-node style resolution.
//!
//! Precedence is fixed and the two style sources are never merged:
//!
//! 1. a non-empty structured style is used verbatim;
//! 2. otherwise non-empty tokens are parsed and their colors adapted to the
//!    terminal background;
//! 3. otherwise the node is unstyled.

use tint::{BackgroundCache, Color, adapt};
use utility::StructuredStyle;

use crate::node::{StyleSource, TextNode};

/// The effective style of one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    pub style: StructuredStyle,
    /// Whitespace-normalised tokens, set only when tokens were the source.
    pub class: Option<String>,
}

impl ResolvedStyle {
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.class.is_none()
    }
}

/// Resolves a node's style, adapting token colors via `background`.
///
/// The background is only consulted when a token string produced an RGB
/// color, so unstyled trees never trigger a probe.
pub fn resolve(node: &TextNode, background: &BackgroundCache) -> ResolvedStyle {
    let mut resolved = resolve_unadapted(node);
    if resolved.class.is_some() {
        adapt_colors(&mut resolved.style, background);
    }
    resolved
}

/// Resolves a node's style without touching colors.
pub fn resolve_unadapted(node: &TextNode) -> ResolvedStyle {
    match node.style_source() {
        StyleSource::Structured(style) => {
            if node.has_conflicting_styles() {
                log::warn!(
                    "text node {:?} has both a structured style and tokens {:?}; using the structured style",
                    node.content,
                    node.style_tokens
                );
            }
            ResolvedStyle {
                style: style.clone(),
                class: None,
            }
        }
        StyleSource::Tokens(tokens) => ResolvedStyle {
            style: utility::parse(tokens),
            class: Some(tokens.split_whitespace().collect::<Vec<_>>().join(" ")),
        },
        StyleSource::None => ResolvedStyle::default(),
    }
}

fn adapt_colors(style: &mut StructuredStyle, background: &BackgroundCache) {
    let needs_adapting = |c: &Option<Color>| c.as_ref().is_some_and(|c| c.rgb().is_some());
    if !needs_adapting(&style.fg) && !needs_adapting(&style.bg) {
        return;
    }

    let dark = background.is_dark();
    style.fg = style.fg.as_ref().map(|c| adapt(c, dark));
    style.bg = style.bg.as_ref().map(|c| adapt(c, dark));
}
