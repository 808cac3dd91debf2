//! Testing utilities for bookr
//!
//! This module provides fixture builders for catalogs and books so unit tests
//! can describe small datasets inline.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Book, Catalog, Directory};
use chrono::{TimeZone, Utc};

/// Build a book with the given identity; remaining fields get fixed values
///
/// The publication date is 2000-01-01 so subtitles are predictable.
///
/// # Panics
/// Never panics for the fixed date used.
#[must_use]
pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        image: format!("https://covers.example.org/{id}.jpg"),
        description: format!("Description of {title}"),
        genres: genres.iter().map(ToString::to_string).collect(),
        published: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Build a directory from `(id, name)` pairs
#[must_use]
pub fn directory(entries: &[(&str, &str)]) -> Directory {
    entries.iter().copied().collect()
}

/// Catalog of `count` books titled "Book 1".."Book N", all by author `a`
///
/// # Panics
/// Panics if `page_size` is zero.
#[must_use]
pub fn numbered_catalog(count: usize, page_size: usize) -> Catalog {
    let books = (1..=count)
        .map(|n| book(&format!("b{n}"), &format!("Book {n}"), "a", &["g"]))
        .collect();
    Catalog::new(
        books,
        directory(&[("a", "Author A")]),
        directory(&[("g", "Genre G")]),
        page_size,
    )
    .expect("valid fixture catalog")
}

/// Small catalog with mixed authors and genres
///
/// | id | title              | author  | genres              |
/// |----|--------------------|---------|---------------------|
/// | h  | The Hobbit         | tolkien | fantasy, adventure  |
/// | d  | Dune               | herbert | scifi               |
/// | t  | The Two Towers     | tolkien | fantasy             |
/// | m  | Dune Messiah       | herbert | scifi, philosophy   |
/// | e  | THE END OF ETERNITY| asimov  | scifi               |
///
/// # Panics
/// Panics if `page_size` is zero.
#[must_use]
pub fn mixed_catalog(page_size: usize) -> Catalog {
    let books = vec![
        book("h", "The Hobbit", "tolkien", &["fantasy", "adventure"]),
        book("d", "Dune", "herbert", &["scifi"]),
        book("t", "The Two Towers", "tolkien", &["fantasy"]),
        book("m", "Dune Messiah", "herbert", &["scifi", "philosophy"]),
        book("e", "THE END OF ETERNITY", "asimov", &["scifi"]),
    ];
    Catalog::new(
        books,
        directory(&[
            ("tolkien", "J.R.R. Tolkien"),
            ("herbert", "Frank Herbert"),
            ("asimov", "Isaac Asimov"),
        ]),
        directory(&[
            ("fantasy", "Fantasy"),
            ("adventure", "Adventure"),
            ("scifi", "Science Fiction"),
            ("philosophy", "Philosophy"),
        ]),
        page_size,
    )
    .expect("valid fixture catalog")
}
