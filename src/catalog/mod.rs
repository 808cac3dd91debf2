//! Book catalog dataset
//!
//! The catalog is the frozen input of a browsing session: a list of books
//! plus author and genre mappings, and the page size used when revealing
//! results. It is loaded once (from a JSON file or the bundled sample) and
//! never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use bookr::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let hobbit = catalog.book("the-hobbit").unwrap();
//! assert_eq!(catalog.author_name(&hobbit.author), Some("J.R.R. Tolkien"));
//! ```

mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{Book, Directory};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Page size used when neither the catalog file nor the user supplies one
pub const DEFAULT_PAGE_SIZE: usize = 36;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk shape of a catalog document
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    page_size: Option<usize>,
    authors: Directory,
    genres: Directory,
    books: Vec<Book>,
}

/// Validated, immutable book catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Directory,
    genres: Directory,
    page_size: usize,
}

impl Catalog {
    /// Build a catalog from its parts, validating identifiers and references
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a mapping or the book list contains a duplicate
    /// identifier, a book refers to an unknown author or genre, or `page_size` is zero.
    pub fn new(
        books: Vec<Book>,
        authors: Directory,
        genres: Directory,
        page_size: usize,
    ) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        if let Some(id) = authors.first_duplicate() {
            return Err(CatalogError::DuplicateKey {
                kind: "author",
                id: id.to_string(),
            });
        }
        if let Some(id) = genres.first_duplicate() {
            return Err(CatalogError::DuplicateKey {
                kind: "genre",
                id: id.to_string(),
            });
        }

        for (idx, book) in books.iter().enumerate() {
            if books[..idx].iter().any(|earlier| earlier.id == book.id) {
                return Err(CatalogError::DuplicateKey {
                    kind: "book",
                    id: book.id.clone(),
                });
            }
            if !authors.contains(&book.author) {
                return Err(CatalogError::UnknownAuthor {
                    book: book.id.clone(),
                    author: book.author.clone(),
                });
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains(g)) {
                return Err(CatalogError::UnknownGenre {
                    book: book.id.clone(),
                    genre: genre.clone(),
                });
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            page_size,
        })
    }

    /// Parse and validate a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for malformed JSON, or any validation
    /// error from [`Catalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(
            file.books,
            file.authors,
            file.genres,
            file.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, otherwise
    /// the same errors as [`Catalog::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The sample catalog bundled with the binary
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document is itself invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Replace the page size
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPageSize` if `page_size` is zero.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// All books in dataset order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub const fn authors(&self) -> &Directory {
        &self.authors
    }

    #[must_use]
    pub const fn genres(&self) -> &Directory {
        &self.genres
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Look up a book by identifier
    #[must_use]
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Display name of an author identifier
    #[must_use]
    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id)
    }

    /// Display name of a genre identifier
    #[must_use]
    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{book, directory};
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 40);
        assert_eq!(catalog.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.books()[0].title, "The Hobbit");
    }

    #[test]
    fn test_lookup_helpers() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.author_name("herbert"), Some("Frank Herbert"));
        assert_eq!(catalog.genre_name("horror"), Some("Horror"));
        assert!(catalog.book("dune").is_some());
        assert!(catalog.book("no-such-book").is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = Catalog::new(vec![], directory(&[]), directory(&[]), 0);
        assert!(matches!(result, Err(CatalogError::InvalidPageSize)));

        let catalog = Catalog::new(vec![], directory(&[]), directory(&[]), 5).unwrap();
        assert!(matches!(
            catalog.with_page_size(0),
            Err(CatalogError::InvalidPageSize)
        ));
    }

    #[test]
    fn test_duplicate_book_rejected() {
        let books = vec![book("a", "A", "x", &[]), book("a", "Again", "x", &[])];
        let result = Catalog::new(books, directory(&[("x", "X")]), directory(&[]), 2);
        match result {
            Err(CatalogError::DuplicateKey { kind, id }) => {
                assert_eq!(kind, "book");
                assert_eq!(id, "a");
            }
            other => panic!("Expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_author_rejected() {
        let json = r#"{
            "authors": { "x": "X", "x": "Again" },
            "genres": {},
            "books": []
        }"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::DuplicateKey { kind: "author", .. })
        ));
    }

    #[test]
    fn test_unknown_references_rejected() {
        let books = vec![book("a", "A", "ghost", &[])];
        assert!(matches!(
            Catalog::new(books, directory(&[("x", "X")]), directory(&[]), 2),
            Err(CatalogError::UnknownAuthor { .. })
        ));

        let books = vec![book("a", "A", "x", &["poetry"])];
        assert!(matches!(
            Catalog::new(books, directory(&[("x", "X")]), directory(&[]), 2),
            Err(CatalogError::UnknownGenre { .. })
        ));
    }

    #[test]
    fn test_page_size_defaults_when_absent() {
        let json = r#"{ "authors": {}, "genres": {}, "books": [] }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.page_size(), DEFAULT_PAGE_SIZE);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "page_size": 2,
                "authors": {{ "x": "Ex" }},
                "genres": {{ "g": "Gee" }},
                "books": [{{
                    "id": "one", "title": "One", "author": "x", "image": "",
                    "description": "", "genres": ["g"],
                    "published": "2000-01-01T00:00:00Z"
                }}]
            }}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.page_size(), 2);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/definitely/not/here/catalog.json");
        assert!(matches!(result, Err(CatalogError::ReadError { .. })));
    }
}
