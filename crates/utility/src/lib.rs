//! Utility-class style tokens for text.
//!
//! This crate turns strings like `"font-bold text-red-500 px-2"` into a
//! typed [`StructuredStyle`].
//!
//! # Token families
//!
//! - Color: `text-red-500`, `bg-sky-100`, `text-[#112233]`, `text-red`
//!   (shade 500), `text-red-500/50` (opacity)
//! - Weight: `font-bold`, `bold`, `font-semibold`, `font-medium`,
//!   `font-normal`, `font-light`, `font-thin`, `font-extralight`
//! - Decoration: `italic`, `not-italic`, `underline`, `no-underline`,
//!   `line-through`, `strikethrough`
//! - Transform: `uppercase`, `lowercase`, `capitalize`, `normal-case`
//! - Opacity proxy: `opacity-50` (faint), `opacity-100`
//! - Spacing: `p-4`, `px-2`, `pt-[12px]`, ...
//! - Size: `text-lg`, `text-2xl`, `text-[18px]`
//!
//! Nothing here fails: an unknown token is skipped and an unknown color is
//! kept as a literal CSS string.
//!
//! # Usage
//!
//! ```
//! use utility::{parse, TextTransform};
//!
//! let style = parse("italic capitalize bg-[#112233]");
//! assert!(style.font.unwrap().italic());
//! assert_eq!(style.transform(), TextTransform::Capitalize);
//! assert_eq!(style.bg.unwrap().to_string(), "#112233");
//! ```

pub mod color;
pub mod parser;
pub mod scale;
pub mod style;

pub use parser::{apply_token, parse};
pub use style::{Decorations, FontStyle, Padding, StructuredStyle, TextTransform};
