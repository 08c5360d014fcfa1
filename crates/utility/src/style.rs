//! Structured style types.
//!
//! A [`StructuredStyle`] is the typed form of a utility token string. Every
//! field is optional; absence means the renderer draws nothing extra.

use std::borrow::Cow;

use bitflags::bitflags;
use tint::Color;

bitflags! {
    /// Boolean text decorations.
    ///
    /// ```
    /// use utility::Decorations;
    ///
    /// let mut d = Decorations::BOLD | Decorations::ITALIC;
    /// d.set(Decorations::BOLD, false);
    /// assert_eq!(d, Decorations::ITALIC);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        const BOLD          = 0b0000_0001;
        const ITALIC        = 0b0000_0010;
        const UNDERLINE     = 0b0000_0100;
        const STRIKETHROUGH = 0b0000_1000;
        /// Dim/light weight; also the proxy for partial opacity.
        const FAINT         = 0b0001_0000;
    }
}

/// Case transformation applied to a node's own content before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    /// Uppercases the first character of every whitespace-delimited word.
    /// The rest of each word is left as written.
    Capitalize,
}

impl TextTransform {
    /// Applies the transform.
    ///
    /// ```
    /// use utility::TextTransform;
    ///
    /// assert_eq!(TextTransform::Capitalize.apply("hello wORLD"), "Hello WORLD");
    /// assert_eq!(TextTransform::Uppercase.apply("hi"), "HI");
    /// ```
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            TextTransform::None => Cow::Borrowed(text),
            TextTransform::Uppercase => Cow::Owned(text.to_uppercase()),
            TextTransform::Lowercase => Cow::Owned(text.to_lowercase()),
            TextTransform::Capitalize => Cow::Owned(capitalize(text)),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Font attributes: decorations, relative size and case transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontStyle {
    pub decorations: Decorations,
    /// Font size in rem-equivalent units.
    pub size: Option<f32>,
    pub transform: TextTransform,
}

impl FontStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `flags` switched on.
    pub fn with(mut self, flags: Decorations) -> Self {
        self.decorations.insert(flags);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn bold(&self) -> bool {
        self.decorations.contains(Decorations::BOLD)
    }

    pub fn italic(&self) -> bool {
        self.decorations.contains(Decorations::ITALIC)
    }

    pub fn underline(&self) -> bool {
        self.decorations.contains(Decorations::UNDERLINE)
    }

    pub fn strikethrough(&self) -> bool {
        self.decorations.contains(Decorations::STRIKETHROUGH)
    }

    pub fn faint(&self) -> bool {
        self.decorations.contains(Decorations::FAINT)
    }

    /// Returns true if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty() && self.size.is_none() && self.transform == TextTransform::None
    }
}

/// Padding in rem-equivalent units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// The typed style of one text node.
///
/// # Examples
///
/// ```
/// use utility::{Decorations, FontStyle, StructuredStyle};
/// use tint::{Color, Rgb};
///
/// let style = StructuredStyle::new()
///     .with_fg(Color::Rgb(Rgb::new(0xef, 0x44, 0x44)))
///     .with_font(FontStyle::new().with(Decorations::BOLD));
/// assert!(!style.is_empty());
/// assert!(style.font.unwrap().bold());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredStyle {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    pub font: Option<FontStyle>,
    pub padding: Option<Padding>,
}

impl StructuredStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Returns true if no property is set to a non-default value.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && self.font.as_ref().is_none_or(FontStyle::is_empty)
            && self.padding.as_ref().is_none_or(Padding::is_empty)
    }

    /// Decorations, or none when no font style is set.
    pub fn decorations(&self) -> Decorations {
        self.font.map(|f| f.decorations).unwrap_or_default()
    }

    /// The text transform, or [`TextTransform::None`].
    pub fn transform(&self) -> TextTransform {
        self.font.map(|f| f.transform).unwrap_or_default()
    }

    pub(crate) fn font_mut(&mut self) -> &mut FontStyle {
        self.font.get_or_insert_with(FontStyle::default)
    }

    pub(crate) fn padding_mut(&mut self) -> &mut Padding {
        self.padding.get_or_insert_with(Padding::default)
    }
}
