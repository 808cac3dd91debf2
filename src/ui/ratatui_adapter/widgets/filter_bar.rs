//! Filter bar widget summarizing the active query

use crate::browse::{Choice, FilterQuery};
use crate::catalog::Catalog;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter bar widget that displays the submitted title, author and genre
pub struct FilterBar<'a> {
    query: &'a FilterQuery,
    catalog: &'a Catalog,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    #[must_use]
    pub const fn new(query: &'a FilterQuery, catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self {
            query,
            catalog,
            theme,
        }
    }

    fn choice_span(
        choice: &Choice,
        all_label: &'static str,
        lookup: impl Fn(&str) -> Option<&'a str>,
        style: Style,
        dimmed: Style,
    ) -> Span<'a> {
        match choice {
            Choice::Any => Span::styled(all_label, dimmed),
            Choice::Only(id) => Span::styled(lookup(id).unwrap_or(id.as_str()).to_string(), style),
        }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Filter (/ to search) ");

        let inner = block.inner(area);
        block.render(area, buf);

        let dimmed = self.theme.dimmed_style();
        let title = if self.query.title.is_empty() {
            Span::styled("any title", dimmed)
        } else {
            Span::styled(format!("\"{}\"", self.query.title), self.theme.title_style())
        };

        let catalog = self.catalog;
        let spans = vec![
            Span::styled("Title: ", dimmed),
            title,
            Span::styled("  Author: ", dimmed),
            Self::choice_span(
                &self.query.author,
                "All authors",
                |id| catalog.author_name(id),
                self.theme.author_style(),
                dimmed,
            ),
            Span::styled("  Genre: ", dimmed),
            Self::choice_span(
                &self.query.genre,
                "All genres",
                |id| catalog.genre_name(id),
                self.theme.genre_style(),
                dimmed,
            ),
        ];

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
