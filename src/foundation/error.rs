/// Convenience result type used across the orb engine.
pub type OrbResult<T> = Result<T, OrbError>;

/// Error taxonomy for the ambient layers (config, decoding, sinks).
///
/// The per-tick core never fails: malformed updates are discarded and degenerate values are
/// defaulted in place. These variants only surface from the surfaces around it.
#[derive(thiserror::Error, Debug)]
pub enum OrbError {
    /// Invalid user-provided configuration or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while preparing or executing frame synthesis.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while writing frames or reading inputs.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrbError {
    /// Build an [`OrbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OrbError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`OrbError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`OrbError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

impl From<serde_json::Error> for OrbError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
