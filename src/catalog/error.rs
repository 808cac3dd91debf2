//! Catalog-specific error types
//!
//! This module defines all error types that can occur while loading and
//! validating a book catalog.
//!
//! # Error Types
//!
//! - **`ReadError`**: The catalog file could not be read from disk
//! - **`ParseError`**: The catalog file is not valid catalog JSON
//! - **`DuplicateKey`**: An author, genre or book identifier appears twice
//! - **`UnknownAuthor`** / **`UnknownGenre`**: A book refers to a missing mapping entry
//! - **`InvalidPageSize`**: A page size of zero was supplied
//!
//! Filtering, paging and selection never fail; only loading does.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document could not be deserialized
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    /// An identifier occurs more than once in a mapping or in the book list
    #[error("Duplicate {kind} identifier '{id}'")]
    DuplicateKey { kind: &'static str, id: String },

    /// A book refers to an author identifier that is not in the author mapping
    #[error("Book '{book}' refers to unknown author '{author}'")]
    UnknownAuthor { book: String, author: String },

    /// A book refers to a genre identifier that is not in the genre mapping
    #[error("Book '{book}' refers to unknown genre '{genre}'")]
    UnknownGenre { book: String, genre: String },

    /// Page size must be positive
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
