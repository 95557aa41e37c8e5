/// Result alias used across the crate.
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Errors surfaced by atlas construction, composition, and export.
#[derive(thiserror::Error, Debug)]
pub enum AtlasError {
    /// A buffer or source image was requested with a zero or overflowing size.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Export was requested with a format outside the supported set.
    #[error("unsupported format: \"{0}\" (expected one of: jpg, jpeg, png, gif)")]
    UnsupportedFormat(String),

    /// Caller-supplied data or options failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The encoder collaborator failed to serialize the buffer.
    #[error("encode error: {0}")]
    Encode(String),

    /// Any other failure, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AtlasError {
    /// Build an [`AtlasError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AtlasError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub(crate) fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
