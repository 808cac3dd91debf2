//! Book card display component
//!
//! A card holds the four display attributes of one listed book and keeps a
//! rendered line for them. Setting an attribute to a new value re-renders
//! the line; setting it to the value it already has does nothing.

use crate::catalog::{Book, Catalog};
use ratatui::text::{Line, Span};

/// The display attributes a card observes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAttribute {
    Title,
    Author,
    Image,
    Id,
}

impl CardAttribute {
    /// Attribute name as used in debug output and tests
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Image => "image",
            Self::Id => "id",
        }
    }
}

/// Reusable list entry for a single book
#[derive(Debug, Clone, Default)]
pub struct BookCard {
    title: String,
    author: String,
    image: String,
    id: String,
    rendered: Line<'static>,
    renders: usize,
}

impl BookCard {
    /// Create an empty card
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card populated from a catalog record
    ///
    /// The author attribute holds the display name, falling back to the raw
    /// identifier when the catalog has no entry for it.
    #[must_use]
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        let mut card = Self::new();
        card.update(book, catalog);
        card
    }

    /// Point the card at another record, re-rendering only if something changed
    pub fn update(&mut self, book: &Book, catalog: &Catalog) {
        let author = catalog
            .author_name(&book.author)
            .unwrap_or(book.author.as_str());
        self.set(CardAttribute::Title, &book.title);
        self.set(CardAttribute::Author, author);
        self.set(CardAttribute::Image, &book.image);
        self.set(CardAttribute::Id, &book.id);
    }

    /// Set one attribute; returns whether the card re-rendered
    pub fn set(&mut self, attribute: CardAttribute, value: &str) -> bool {
        let slot = match attribute {
            CardAttribute::Title => &mut self.title,
            CardAttribute::Author => &mut self.author,
            CardAttribute::Image => &mut self.image,
            CardAttribute::Id => &mut self.id,
        };
        if slot.as_str() == value {
            return false;
        }
        value.clone_into(slot);
        self.render();
        true
    }

    /// Current value of an attribute
    #[must_use]
    pub fn get(&self, attribute: CardAttribute) -> &str {
        match attribute {
            CardAttribute::Title => &self.title,
            CardAttribute::Author => &self.author,
            CardAttribute::Image => &self.image,
            CardAttribute::Id => &self.id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The last rendered line (unstyled; the list applies theme styles)
    #[must_use]
    pub const fn line(&self) -> &Line<'static> {
        &self.rendered
    }

    /// How many times the card has rendered
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.renders
    }

    fn render(&mut self) {
        let mut spans = vec![Span::raw(self.title.clone())];
        if !self.author.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::raw(self.author.clone()));
        }
        self.rendered = Line::from(spans);
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mixed_catalog;

    fn line_text(card: &BookCard) -> String {
        card.line()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn test_from_book_populates_all_attributes() {
        let catalog = mixed_catalog(2);
        let card = BookCard::from_book(&catalog.books()[0], &catalog);

        assert_eq!(card.get(CardAttribute::Title), "The Hobbit");
        assert_eq!(card.get(CardAttribute::Author), "J.R.R. Tolkien");
        assert_eq!(card.get(CardAttribute::Image), "https://covers.example.org/h.jpg");
        assert_eq!(card.get(CardAttribute::Id), "h");
        assert_eq!(line_text(&card), "The Hobbit  J.R.R. Tolkien");
    }

    #[test]
    fn test_setting_changed_value_rerenders() {
        let mut card = BookCard::new();
        assert_eq!(card.render_count(), 0);

        assert!(card.set(CardAttribute::Title, "Dune"));
        assert_eq!(card.render_count(), 1);
        assert_eq!(line_text(&card), "Dune");

        assert!(card.set(CardAttribute::Author, "Frank Herbert"));
        assert_eq!(card.render_count(), 2);
        assert_eq!(line_text(&card), "Dune  Frank Herbert");
    }

    #[test]
    fn test_setting_same_value_does_not_rerender() {
        let mut card = BookCard::new();
        card.set(CardAttribute::Id, "d");
        let renders = card.render_count();

        assert!(!card.set(CardAttribute::Id, "d"));
        assert_eq!(card.render_count(), renders);
    }

    #[test]
    fn test_update_to_same_book_is_free() {
        let catalog = mixed_catalog(2);
        let mut card = BookCard::from_book(&catalog.books()[1], &catalog);
        let renders = card.render_count();

        card.update(&catalog.books()[1], &catalog);
        assert_eq!(card.render_count(), renders);

        card.update(&catalog.books()[3], &catalog);
        assert!(card.render_count() > renders);
        assert_eq!(card.id(), "m");
        assert_eq!(card.title(), "Dune Messiah");
        assert_eq!(card.author(), "Frank Herbert");
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(CardAttribute::Title.name(), "title");
        assert_eq!(CardAttribute::Image.name(), "image");
    }
}
