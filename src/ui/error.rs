//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The cover image could not be handed to the system viewer
    #[error("Failed to open '{uri}': {source}")]
    OpenError {
        uri: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
