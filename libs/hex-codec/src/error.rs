//! Error types for hex-codec

use thiserror::Error;

/// Hex codec errors
///
/// Parsing never fails; only the checked render path and width lookup
/// report errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("Buffer too small: need {required} units, got {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    #[error("Unknown integer width: {0} (expected 8, 16, 32 or 64)")]
    UnknownWidth(String),
}

impl HexError {
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self::BufferTooSmall { required, capacity }
    }

    pub fn unknown_width(width: impl Into<String>) -> Self {
        Self::UnknownWidth(width.into())
    }
}

pub type Result<T> = std::result::Result<T, HexError>;
