//! The text node tree.
//!
//! A [`TextNode`] is a plain value: content, an optional style (as raw
//! utility tokens or as a [`StructuredStyle`]) and ordered children. Cloning
//! deep-copies the children, and the builder methods take `self` by value,
//! so two chains started from the same node never share a child list.

use std::fmt;

use utility::StructuredStyle;

use crate::render::Format;

/// Where a node's effective style comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleSource<'a> {
    /// A non-empty structured style, used verbatim.
    Structured(&'a StructuredStyle),
    /// A non-empty utility token string.
    Tokens(&'a str),
    /// Nothing to apply.
    None,
}

/// A fragment of styled text with ordered children.
///
/// # Examples
///
/// ```
/// use textnode::{Format, TextNode};
///
/// let node = TextNode::new("Hello, ").with_child(TextNode::styled("world!", "font-bold"));
/// assert_eq!(Format::Markdown.render(&node), "Hello, **world!**");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextNode {
    /// The node's own text.
    pub content: String,
    /// Raw utility tokens, e.g. `"font-bold text-red-500"`.
    pub style_tokens: String,
    /// Pre-built style; takes precedence over `style_tokens` when non-empty.
    pub style: Option<StructuredStyle>,
    /// Rendered after this node's own span, in order.
    pub children: Vec<TextNode>,
}

impl TextNode {
    /// Creates an unstyled node.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Creates a node styled by utility tokens.
    pub fn styled(content: impl Into<String>, tokens: impl Into<String>) -> Self {
        Self::new(content).with_tokens(tokens)
    }

    /// Creates a content-less node holding `children`.
    pub fn group(children: impl IntoIterator<Item = TextNode>) -> Self {
        Self {
            children: children.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_tokens(mut self, tokens: impl Into<String>) -> Self {
        self.style_tokens = tokens.into();
        self
    }

    pub fn with_style(mut self, style: StructuredStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_child(mut self, child: TextNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TextNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a child in place.
    pub fn push(&mut self, child: TextNode) {
        self.children.push(child);
    }

    /// Returns a copy of this node with `child` appended; `self` is untouched.
    pub fn append(&self, child: TextNode) -> Self {
        self.clone().with_child(child)
    }

    /// True if this node and all descendants have empty content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.iter().all(TextNode::is_empty)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TextNode::len).sum::<usize>()
    }

    /// Picks the authoritative style source.
    ///
    /// A non-empty structured style wins outright; tokens are only consulted
    /// when it is absent or empty.
    pub fn style_source(&self) -> StyleSource<'_> {
        match &self.style {
            Some(style) if !style.is_empty() => StyleSource::Structured(style),
            _ if !self.style_tokens.trim().is_empty() => StyleSource::Tokens(&self.style_tokens),
            _ => StyleSource::None,
        }
    }

    /// True when both a non-empty structured style and tokens are set.
    ///
    /// Only the structured style is used in that case.
    pub fn has_conflicting_styles(&self) -> bool {
        matches!(self.style_source(), StyleSource::Structured(_))
            && !self.style_tokens.trim().is_empty()
    }
}

impl From<&str> for TextNode {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for TextNode {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl FromIterator<TextNode> for TextNode {
    fn from_iter<I: IntoIterator<Item = TextNode>>(iter: I) -> Self {
        Self::group(iter)
    }
}

impl Extend<TextNode> for TextNode {
    fn extend<I: IntoIterator<Item = TextNode>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

/// Displays the plain-text rendering.
impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Format::Plain.render(self))
    }
}
