use thiserror::Error;

/// Source error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("HTTP Error: {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The upstream answered but had nothing usable for this number.
    #[error("{0}")]
    Unavailable(String),

    #[error("{0} API key is required")]
    MissingCredential(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::SerializationError(err.to_string())
    }
}
