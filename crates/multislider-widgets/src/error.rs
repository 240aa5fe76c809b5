//! Error types for multi-slider construction and configuration.

use thiserror::Error;

/// Errors raised while building or addressing a [`MultiSlider`](crate::MultiSlider).
#[derive(Debug, Error)]
pub enum SliderError {
    /// A slider needs at least one thumb.
    #[error("a multi-slider needs at least one thumb")]
    NoThumbs,

    /// Minimum above maximum.
    #[error("invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: i32, max: i32 },

    /// Explicit values do not match the thumb count.
    #[error("expected {expected} thumb values, found {found}")]
    ValueCountMismatch { expected: usize, found: usize },

    /// Raw thumb index out of range.
    #[error("thumb index {index} out of range for {count} thumbs")]
    InvalidThumbIndex { index: usize, count: usize },

    /// YAML could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}
