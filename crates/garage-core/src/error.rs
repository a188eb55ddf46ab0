//! Error types for vehicle info decoding

use thiserror::Error;

/// Result type for decoding operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while decoding a vehicle info snapshot
#[derive(Debug, Error)]
pub enum CoreError {
    /// Capability id outside the known registry.
    ///
    /// The capability decoder recovers from this by dropping the record, so it
    /// only surfaces from explicit lookups such as `CapabilityId::from_str`.
    #[error("unknown capability id: {0}")]
    UnknownCapabilityId(String),

    /// Required field missing, wrong-typed, or outside its closed value set
    #[error("malformed field `{field}`: {reason}")]
    MalformedField { field: String, reason: String },

    /// Document could not be parsed or did not match the expected shape
    #[error("malformed vehicle info: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a malformed field error
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error rejects the content of the document (as opposed to
    /// failing to read it at all)
    pub fn is_malformed(&self) -> bool {
        match self {
            CoreError::MalformedField { .. } => true,
            CoreError::Json(e) => !e.is_io(),
            CoreError::UnknownCapabilityId(_) | CoreError::Io(_) => false,
        }
    }
}
