//! Page arithmetic for revealing a result sequence in fixed-size blocks
//!
//! Pages are 1-based. After `page` reveals the first
//! `min(page * page_size, total)` results are on screen, and each further
//! reveal appends exactly the next block.

use std::ops::Range;

/// Pagination cursor over a result sequence of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    /// Create a pager positioned on page 1
    ///
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total,
        }
    }

    /// Current page number (starts at 1)
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Length of the underlying result sequence
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Incremental block for `page`: `[(page-1)*size, page*size)` clamped to the results
    #[must_use]
    pub fn current_slice(&self, page: usize) -> Range<usize> {
        let start = page.saturating_sub(1).saturating_mul(self.page_size).min(self.total);
        let end = page.saturating_mul(self.page_size).min(self.total);
        start..end
    }

    /// Cumulative range shown after `page` reveals: `[0, page*size)` clamped
    #[must_use]
    pub fn rendered_range(&self, page: usize) -> Range<usize> {
        0..page.saturating_mul(self.page_size).min(self.total)
    }

    /// Results not yet shown after `page` reveals; negative once exhausted
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn remaining(&self, page: usize) -> isize {
        self.total as isize - page.saturating_mul(self.page_size) as isize
    }

    /// [`Pager::remaining`] floored at zero, for display
    #[must_use]
    pub fn remaining_clamped(&self, page: usize) -> usize {
        self.total.saturating_sub(page.saturating_mul(self.page_size))
    }

    /// Number of results currently shown
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered_range(self.page).end
    }

    /// Whether the reveal-more affordance is enabled
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.remaining(self.page) > 0
    }

    /// Advance one page and return the newly revealed block
    ///
    /// Returns `None` and leaves the cursor untouched when nothing is left.
    pub fn reveal_more(&mut self) -> Option<Range<usize>> {
        if !self.has_more() {
            return None;
        }
        self.page += 1;
        Some(self.current_slice(self.page))
    }

    /// Total number of pages, at least one
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Point at a new result sequence and return to page 1
    pub const fn reset(&mut self, total: usize) {
        self.page = 1;
        self.total = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pager_starts_on_page_one() {
        let pager = Pager::new(5, 2);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.rendered_count(), 2);
        assert_eq!(pager.remaining(1), 3);
        assert!(pager.has_more());
    }

    #[test]
    fn test_incremental_slices() {
        let pager = Pager::new(5, 2);
        assert_eq!(pager.current_slice(1), 0..2);
        assert_eq!(pager.current_slice(2), 2..4);
        assert_eq!(pager.current_slice(3), 4..5);
        assert_eq!(pager.current_slice(4), 5..5);
    }

    #[test]
    fn test_cumulative_ranges() {
        let pager = Pager::new(5, 2);
        assert_eq!(pager.rendered_range(1), 0..2);
        assert_eq!(pager.rendered_range(2), 0..4);
        assert_eq!(pager.rendered_range(3), 0..5);
        assert_eq!(pager.rendered_range(9), 0..5);
    }

    #[test]
    fn test_remaining_goes_negative_and_clamps() {
        let pager = Pager::new(5, 2);
        assert_eq!(pager.remaining(3), -1);
        assert_eq!(pager.remaining_clamped(3), 0);
        assert_eq!(pager.remaining_clamped(2), 1);
    }

    #[test]
    fn test_reveal_sequence_five_records_page_size_two() {
        let mut pager = Pager::new(5, 2);

        assert_eq!(pager.reveal_more(), Some(2..4));
        assert_eq!(pager.rendered_count(), 4);
        assert_eq!(pager.remaining(pager.page()), 1);
        assert!(pager.has_more());

        assert_eq!(pager.reveal_more(), Some(4..5));
        assert_eq!(pager.rendered_count(), 5);
        assert!(!pager.has_more());

        assert_eq!(pager.reveal_more(), None);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_reveals_needed_to_exhaust() {
        for total in 0..30 {
            for page_size in 1..7 {
                let mut pager = Pager::new(total, page_size);
                let mut reveals = 0;
                while pager.reveal_more().is_some() {
                    reveals += 1;
                }
                let expected = total.div_ceil(page_size).saturating_sub(1);
                assert_eq!(reveals, expected, "total={total} size={page_size}");
                assert_eq!(pager.rendered_count(), total);
                assert!(!pager.has_more());
            }
        }
    }

    #[test]
    fn test_empty_results() {
        let mut pager = Pager::new(0, 3);
        assert_eq!(pager.rendered_count(), 0);
        assert!(!pager.has_more());
        assert_eq!(pager.reveal_more(), None);
        assert_eq!(pager.page_count(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = Pager::new(10, 3);
        pager.reveal_more();
        pager.reveal_more();
        assert_eq!(pager.page(), 3);

        pager.reset(4);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.total(), 4);
        assert_eq!(pager.rendered_count(), 3);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let pager = Pager::new(3, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.page_count(), 3);
    }
}
