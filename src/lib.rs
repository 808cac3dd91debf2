//! Bookr - A fast, filterable book catalog browser
//!
//! This library provides a read-only book catalog with title, author and
//! genre filtering, fixed-size "show more" paging, detail lookup, and a
//! day/night themed terminal browser built on ratatui.
//!
//! # Examples
//!
//! ```
//! use bookr::browse::{CatalogController, Choice, FilterQuery};
//! use bookr::catalog::Catalog;
//!
//! # fn main() -> Result<(), bookr::BookrError> {
//! let catalog = Catalog::builtin()?.with_page_size(2)?;
//! let mut controller = CatalogController::new(catalog);
//!
//! controller.submit(FilterQuery::all().with_author(Choice::Only("tolkien".into())));
//! assert_eq!(controller.rendered_count(), 2);
//! assert!(controller.has_more());
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod output;
pub mod theme;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BookrError {
    /// Catalog could not be loaded or failed validation
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
