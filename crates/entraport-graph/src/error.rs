//! Error types for the directory reader.

use thiserror::Error;

/// Result type alias using `GraphError`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when reading from the directory service.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Client construction or configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory service returned a non-success status.
    #[error("Graph API error ({status}): {code} - {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A directory object is missing an attribute the caller requires.
    #[error("Object {object_id} is missing attribute {attribute}")]
    MissingAttribute {
        object_id: String,
        attribute: &'static str,
    },
}
