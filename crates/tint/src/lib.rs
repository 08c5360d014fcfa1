//! Color math for utility-styled text.
//!
//! This crate converts between hex, RGB and HSL, computes WCAG luminance,
//! and recolors low-contrast colors for the detected terminal background.
//!
//! # Adaptive coloring
//!
//! ```
//! use tint::{adapt, Color, Rgb};
//!
//! // Pure black is unreadable on a dark terminal, so it is lifted.
//! let black = Color::Rgb(Rgb::new(0, 0, 0));
//! assert_eq!(adapt(&black, true), Color::Rgb(Rgb::new(153, 153, 153)));
//!
//! // Mid-luminance colors are left alone.
//! let red = Color::Rgb(Rgb::new(0xef, 0x44, 0x44));
//! assert_eq!(adapt(&red, true), red);
//! ```
//!
//! The background itself comes from a [`background::BackgroundCache`],
//! probed once and shared. Tests construct their own cache with a
//! [`background::FixedProbe`] instead of touching the process-wide one.

pub mod adapt;
pub mod background;
pub mod color;
pub mod error;
pub mod palette;
pub mod rgb;

pub use adapt::{adapt, adapt_rgb};
pub use background::{Background, BackgroundCache};
pub use color::Color;
pub use error::ColorError;
pub use rgb::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, luminance, rgb_to_hex, rgb_to_hsl};
