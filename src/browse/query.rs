//! Filter evaluation over the catalog
//!
//! A [`FilterQuery`] combines three predicates with logical AND:
//!
//! - **title**: empty, or a case-insensitive substring of the book title
//! - **author**: [`Choice::Any`], or equal to the book's author identifier
//! - **genre**: [`Choice::Any`], or a member of the book's genre list
//!
//! Evaluation never ranks or reorders: matches come back in dataset order,
//! and an empty result is an ordinary outcome.

use crate::catalog::{Book, Catalog};
use std::fmt;

/// Selector value that is either unconstrained or a specific identifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    /// Matches every record
    #[default]
    Any,
    /// Matches only the given identifier
    Only(String),
}

impl Choice {
    /// Keyword accepted on the command line for [`Choice::Any`]
    pub const ANY: &'static str = "any";

    /// Parse a selector value, treating `"any"` (any case) and empty as unconstrained
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ANY) {
            Self::Any
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The constrained identifier, if any
    #[must_use]
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Only(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<Option<String>> for Choice {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Any, |id| Self::parse(&id))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(Self::ANY),
            Self::Only(id) => f.write_str(id),
        }
    }
}

/// A complete filter submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    /// Title substring, matched case-insensitively; empty matches everything
    pub title: String,
    pub author: Choice,
    pub genre: Choice,
}

impl FilterQuery {
    /// Query that matches every record
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(title: impl Into<String>, author: Choice, genre: Choice) -> Self {
        Self {
            title: title.into(),
            author,
            genre,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: Choice) -> Self {
        self.author = author;
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: Choice) -> Self {
        self.genre = genre;
        self
    }

    /// Whether no predicate is active
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Title predicate
    #[must_use]
    pub fn title_matches(&self, book: &Book) -> bool {
        self.title.is_empty() || book.title.to_lowercase().contains(&self.title.to_lowercase())
    }

    /// Author predicate
    #[must_use]
    pub fn author_matches(&self, book: &Book) -> bool {
        self.author.as_id().is_none_or(|id| book.author == id)
    }

    /// Genre predicate
    #[must_use]
    pub fn genre_matches(&self, book: &Book) -> bool {
        self.genre.as_id().is_none_or(|id| book.has_genre(id))
    }

    /// Whether a book satisfies all three predicates
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }

    /// Indices of matching books, in dataset order
    #[must_use]
    pub fn apply(&self, catalog: &Catalog) -> Vec<usize> {
        catalog
            .books()
            .iter()
            .enumerate()
            .filter(|(_, book)| self.matches(book))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Renders the equivalent `bookr list` invocation, shown as a CLI hint in the TUI
impl fmt::Display for FilterQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bookr list")?;
        if !self.title.is_empty() {
            if self.title.contains(char::is_whitespace) {
                write!(f, " --title \"{}\"", self.title)?;
            } else {
                write!(f, " --title {}", self.title)?;
            }
        }
        if let Choice::Only(id) = &self.author {
            write!(f, " --author {id}")?;
        }
        if let Choice::Only(id) = &self.genre {
            write!(f, " --genre {id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{book, directory, mixed_catalog};

    fn titles(catalog: &Catalog, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&idx| catalog.books()[idx].title.clone())
            .collect()
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("any"), Choice::Any);
        assert_eq!(Choice::parse("ANY"), Choice::Any);
        assert_eq!(Choice::parse(""), Choice::Any);
        assert_eq!(Choice::parse("tolkien"), Choice::Only("tolkien".to_string()));
        assert_eq!(Choice::from(None), Choice::Any);
        assert_eq!(
            Choice::from(Some("scifi".to_string())),
            Choice::Only("scifi".to_string())
        );
    }

    #[test]
    fn test_unconstrained_query_returns_everything_in_order() {
        let catalog = mixed_catalog(2);
        let result = FilterQuery::all().apply(&catalog);
        assert_eq!(result, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let catalog = Catalog::new(
            vec![
                book("1", "The Hobbit", "a", &[]),
                book("2", "Dune", "a", &[]),
                book("3", "The Two Towers", "a", &[]),
            ],
            directory(&[("a", "A")]),
            directory(&[]),
            2,
        )
        .unwrap();

        let result = FilterQuery::all().with_title("the").apply(&catalog);
        assert_eq!(titles(&catalog, &result), vec!["The Hobbit", "The Two Towers"]);
    }

    #[test]
    fn test_title_query_uppercase_matches_lowercase_title() {
        let catalog = mixed_catalog(2);
        let result = FilterQuery::all().with_title("ETERNITY").apply(&catalog);
        assert_eq!(titles(&catalog, &result), vec!["THE END OF ETERNITY"]);

        let result = FilterQuery::all().with_title("eternity").apply(&catalog);
        assert_eq!(titles(&catalog, &result), vec!["THE END OF ETERNITY"]);
    }

    #[test]
    fn test_author_filter() {
        let catalog = mixed_catalog(2);
        let query = FilterQuery::all().with_author(Choice::parse("herbert"));
        let result = query.apply(&catalog);
        assert_eq!(titles(&catalog, &result), vec!["Dune", "Dune Messiah"]);
    }

    #[test]
    fn test_genre_filter_uses_membership() {
        let catalog = mixed_catalog(2);
        let query = FilterQuery::all().with_genre(Choice::parse("philosophy"));
        assert_eq!(titles(&catalog, &query.apply(&catalog)), vec!["Dune Messiah"]);

        let query = FilterQuery::all().with_genre(Choice::parse("fantasy"));
        assert_eq!(
            titles(&catalog, &query.apply(&catalog)),
            vec!["The Hobbit", "The Two Towers"]
        );
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let catalog = mixed_catalog(2);
        let query = FilterQuery::new("the", Choice::parse("tolkien"), Choice::parse("adventure"));
        assert_eq!(titles(&catalog, &query.apply(&catalog)), vec!["The Hobbit"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let catalog = mixed_catalog(2);
        let query = FilterQuery::all()
            .with_author(Choice::parse("asimov"))
            .with_genre(Choice::parse("fantasy"));
        assert!(query.apply(&catalog).is_empty());
    }

    #[test]
    fn test_unknown_identifier_matches_nothing() {
        let catalog = mixed_catalog(2);
        let query = FilterQuery::all().with_author(Choice::parse("nobody"));
        assert!(query.apply(&catalog).is_empty());
    }

    #[test]
    fn test_result_is_order_preserving_subsequence_satisfying_predicates() {
        let catalog = Catalog::builtin().unwrap();
        let queries = [
            FilterQuery::all().with_title("the"),
            FilterQuery::all().with_genre(Choice::parse("classics")),
            FilterQuery::new("a", Choice::parse("tolkien"), Choice::Any),
            FilterQuery::new("", Choice::Any, Choice::parse("horror")),
            FilterQuery::new("zzz", Choice::Any, Choice::Any),
        ];

        for query in &queries {
            let result = query.apply(&catalog);
            assert!(result.windows(2).all(|pair| pair[0] < pair[1]));

            for (idx, book) in catalog.books().iter().enumerate() {
                assert_eq!(result.contains(&idx), query.matches(book), "{query:?} / {}", book.id);
            }
        }
    }

    #[test]
    fn test_display_as_cli_hint() {
        assert_eq!(FilterQuery::all().to_string(), "bookr list");
        let query = FilterQuery::new("two towers", Choice::parse("tolkien"), Choice::parse("fantasy"));
        assert_eq!(
            query.to_string(),
            "bookr list --title \"two towers\" --author tolkien --genre fantasy"
        );
        assert!(!query.is_unconstrained());
        assert!(FilterQuery::all().is_unconstrained());
    }
}
