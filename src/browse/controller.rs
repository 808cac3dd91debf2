//! Catalog view controller
//!
//! Owns the only mutable browsing state: the current result sequence, the
//! pagination cursor, and the list of entries revealed so far. Each public
//! mutator corresponds to one user command and runs to completion.
//!
//! # Examples
//!
//! ```
//! use bookr::browse::{CatalogController, Choice, FilterQuery};
//! use bookr::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap().with_page_size(2).unwrap();
//! let mut controller = CatalogController::new(catalog);
//!
//! controller.submit(FilterQuery::all().with_author(Choice::parse("tolkien")));
//! assert_eq!(controller.rendered_count(), 2);
//! assert_eq!(controller.remaining(), 2);
//!
//! controller.reveal_more();
//! assert!(!controller.has_more());
//! ```

use super::pager::Pager;
use super::query::FilterQuery;
use super::selection::{self, DetailView};
use crate::catalog::{Book, Catalog};
use std::ops::Range;

/// Holds the filter results and pagination cursor for one browsing session
#[derive(Debug, Clone)]
pub struct CatalogController {
    catalog: Catalog,
    query: FilterQuery,
    /// Dataset indices of all matches, in dataset order
    results: Vec<usize>,
    /// Dataset indices revealed so far; always a prefix of `results`
    revealed: Vec<usize>,
    pager: Pager,
}

impl CatalogController {
    /// Create a controller showing the first page of the unfiltered catalog
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let page_size = catalog.page_size();
        let mut controller = Self {
            catalog,
            query: FilterQuery::all(),
            results: Vec::new(),
            revealed: Vec::new(),
            pager: Pager::new(0, page_size),
        };
        controller.submit(FilterQuery::all());
        controller
    }

    /// Apply a filter, reset to page 1 and reveal the first block
    ///
    /// Previously revealed entries are discarded. Returns the range of
    /// revealed positions that were (re)populated, which is always `0..n`.
    pub fn submit(&mut self, query: FilterQuery) -> Range<usize> {
        self.results = query.apply(&self.catalog);
        self.query = query;
        self.pager.reset(self.results.len());
        self.revealed.clear();

        let block = self.pager.current_slice(1);
        self.revealed.extend_from_slice(&self.results[block.clone()]);
        block
    }

    /// Append the next block of results
    ///
    /// Returns the positions of the newly revealed entries, or `None` when
    /// nothing is left (the cursor is not advanced in that case).
    pub fn reveal_more(&mut self) -> Option<Range<usize>> {
        let block = self.pager.reveal_more()?;
        self.revealed.extend_from_slice(&self.results[block.clone()]);
        Some(block)
    }

    /// Resolve an identifier against the full catalog
    #[must_use]
    pub fn select(&self, id: &str) -> Option<DetailView> {
        selection::detail(&self.catalog, id)
    }

    /// Revealed books, in display order
    pub fn rendered(&self) -> impl Iterator<Item = &Book> {
        self.revealed.iter().map(|&idx| &self.catalog.books()[idx])
    }

    /// Revealed book at a display position
    #[must_use]
    pub fn rendered_at(&self, position: usize) -> Option<&Book> {
        self.revealed
            .get(position)
            .map(|&idx| &self.catalog.books()[idx])
    }

    /// Revealed books within a range of display positions
    pub fn rendered_range(&self, range: Range<usize>) -> impl Iterator<Item = &Book> {
        let end = range.end.min(self.revealed.len());
        let start = range.start.min(end);
        self.revealed[start..end]
            .iter()
            .map(|&idx| &self.catalog.books()[idx])
    }

    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.revealed.len()
    }

    /// All matching books, revealed or not
    pub fn results(&self) -> impl Iterator<Item = &Book> {
        self.results.iter().map(|&idx| &self.catalog.books()[idx])
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Matches not yet revealed, floored at zero
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pager.remaining_clamped(self.pager.page())
    }

    /// Whether the reveal-more affordance is enabled
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    /// Current pagination cursor (starts at 1)
    #[must_use]
    pub const fn page(&self) -> usize {
        self.pager.page()
    }

    #[must_use]
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The most recently submitted query
    #[must_use]
    pub const fn query(&self) -> &FilterQuery {
        &self.query
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
