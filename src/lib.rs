//! Styled text trees written with utility classes.
//!
//! ```
//! use tailtext::{Format, TextNode};
//!
//! let greeting = TextNode::new("Hello, ").with_child(TextNode::styled("world!", "font-bold"));
//!
//! assert_eq!(Format::Markdown.render(&greeting), "Hello, **world!**");
//! assert_eq!(
//!     Format::Html.render(&greeting),
//!     r#"Hello, <span class="font-bold"><strong>world!</strong></span>"#
//! );
//! ```
//!
//! The work is split across three crates, re-exported here:
//!
//! - [`tint`]: RGB/HSL math, the palette and background-aware color adaptation
//! - [`utility`]: the token parser producing a [`StructuredStyle`]
//! - [`textnode`]: the tree, style resolution and the four renderers
//!
//! This crate adds what a program needs around them: [`Config`] from the
//! environment, terminal [`Environment`] detection, a [`Printer`] and a file
//! logger.

pub mod config;
pub mod environment;
pub mod error;
mod log_init;
pub mod printer;

pub use config::{ColorMode, Config};
pub use environment::Environment;
pub use error::{Error, Result};
pub use log_init::init_logger;
pub use printer::Printer;

pub use textnode::{
    Format, ResolvedStyle, StyleSource, TextNode, render_ansi, render_html, render_markdown,
    render_plain, resolve,
};
pub use tint::{Background, BackgroundCache, Color, Rgb};
pub use utility::{Decorations, FontStyle, Padding, StructuredStyle, TextTransform};

// Re-export the crates so users can reach the full APIs.
pub use log;
pub use textnode;
pub use tint;
pub use utility;
