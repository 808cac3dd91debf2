//! Selection resolution and detail projection
//!
//! Lookups always go against the complete catalog, never the filtered result
//! set. An identifier that matches nothing resolves to `None`; callers treat
//! that as "do nothing".

use crate::catalog::{Book, Catalog};

/// What the detail panel shows for a selected book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Identifier of the selected book
    pub id: String,
    /// Cover image URI
    pub image: String,
    pub title: String,
    /// `"<author name> (<publication year>)"`
    pub subtitle: String,
    pub description: String,
    /// Display names of the book's genres, in record order
    pub genres: Vec<String>,
}

impl DetailView {
    /// Project a book into its detail view
    ///
    /// Unknown author or genre identifiers fall back to the raw identifier.
    #[must_use]
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        let author = catalog.author_name(&book.author).unwrap_or(book.author.as_str());
        let genres = book
            .genres
            .iter()
            .map(|id| catalog.genre_name(id).unwrap_or(id.as_str()).to_string())
            .collect();

        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{author} ({})", book.published_year()),
            description: book.description.clone(),
            genres,
        }
    }
}

/// Resolve an identifier captured from a user interaction
#[must_use]
pub fn resolve<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Book> {
    catalog.book(id)
}

/// Resolve an identifier straight to its detail projection
#[must_use]
pub fn detail(catalog: &Catalog, id: &str) -> Option<DetailView> {
    resolve(catalog, id).map(|book| DetailView::from_book(book, catalog))
}
