/// Convenience result type used across chartsvg.
pub type ChartResult<T> = Result<T, ChartError>;

/// Top-level error taxonomy for the fallible boundary operations.
///
/// Rendering itself is infallible: malformed payloads degrade to documented fallbacks and absent
/// nodes render to nothing. Errors only surface when decoding scene graphs or exporting output.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// Scene-graph data that violates a structural contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while converting rendered markup into an export tree.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    /// Build a [`ChartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChartError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ChartError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
