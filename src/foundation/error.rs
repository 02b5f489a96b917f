/// Convenience result type used across ringfield.
pub type RingfieldResult<T> = Result<T, RingfieldError>;

/// Top-level error taxonomy used by engine and sink APIs.
#[derive(thiserror::Error, Debug)]
pub enum RingfieldError {
    /// Invalid host-provided input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a render sink while drawing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding rendered frames.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RingfieldError {
    /// Build a [`RingfieldError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RingfieldError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RingfieldError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RingfieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
