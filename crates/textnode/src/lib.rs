//! Styled text trees and their four renderings.
//!
//! A [`TextNode`] holds content, a style and ordered children. The style is
//! either a utility token string (`"font-bold text-red-500"`) or a pre-built
//! [`StructuredStyle`](utility::StructuredStyle); [`resolve`] picks one, and a
//! [`Format`] turns the tree into a string.
//!
//! ## Pipeline
//! ```text
//! tokens --parse--> StructuredStyle --adapt--> ResolvedStyle --wrap--> String
//!                                                   ^
//!                                         TextNode (recursive)
//! ```
//!
//! # Examples
//!
//! ```
//! use textnode::{Format, TextNode};
//! use tint::background::{Background, BackgroundCache, FixedProbe};
//!
//! let cache = BackgroundCache::new(FixedProbe(Background::Light));
//! let node = TextNode::styled("Deleted", "line-through");
//!
//! assert_eq!(Format::Plain.render_with(&node, &cache), "Deleted");
//! assert_eq!(Format::Ansi.render_with(&node, &cache), "\x1b[9mDeleted\x1b[29m");
//! assert_eq!(Format::Markdown.render_with(&node, &cache), "~~Deleted~~");
//! assert_eq!(
//!     Format::Html.render_with(&node, &cache),
//!     r#"<span class="line-through"><s>Deleted</s></span>"#
//! );
//! ```
//!
//! Rendering never fails: malformed tokens are skipped and unknown colors are
//! passed through where the format allows raw CSS.

pub mod node;
pub mod render;
pub mod resolve;

pub use node::{StyleSource, TextNode};
pub use render::{Format, render_ansi, render_html, render_markdown, render_plain};
pub use resolve::{ResolvedStyle, resolve, resolve_unadapted};
