//! Error types for color parsing.

use thiserror::Error;

/// Errors that can occur when converting color strings.
///
/// Renderers never see these: token parsing turns a failed conversion into
/// a literal pass-through color instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Not a six-digit `#rrggbb` string.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Opacity outside `0..=100` percent.
    #[error("invalid opacity: {0}")]
    InvalidOpacity(String),
}
