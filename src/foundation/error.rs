/// Convenience result type used across pixelify.
pub type PixelifyResult<T> = Result<T, PixelifyError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Compositing, sampling, hex encoding and document generation do not fail for validated
/// inputs. Failures live at the boundaries: decoding, parameter validation and sinks.
#[derive(thiserror::Error, Debug)]
pub enum PixelifyError {
    /// Invalid user-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A document sink rejected the write. The computed grid and document stay valid.
    #[error("sink error: {0}")]
    Sink(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelifyError {
    /// Build a [`PixelifyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixelifyError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PixelifyError::Sink`] value.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Build a [`PixelifyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for sink failures, which callers may retry with the same document.
    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
