//! Book list widget and its "Show more" footer

use crate::ui::card::BookCard;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// List of revealed book cards with a cursor indicator
pub struct BookList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> BookList<'a> {
    /// Create a new book list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let shown = state.cards.len();
        let total = state.controller.result_count();
        let title = format!(" Books ({shown}/{total}) ");

        Self {
            state,
            theme,
            title,
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn render_card(&self, card: &BookCard, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
        ];

        // The card's line is "title  author"; style the two parts separately
        let mut parts = card.line().spans.iter();
        if let Some(title) = parts.next() {
            let style = if is_cursor {
                self.theme.selected_style()
            } else {
                self.theme.normal_style()
            };
            spans.push(Span::styled(title.content.clone(), style));
        }
        for part in parts {
            spans.push(Span::styled(part.content.clone(), self.theme.author_style()));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for BookList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.cards.is_empty() {
            Paragraph::new("No results found")
                .style(self.theme.dimmed_style().add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let visible_height = usize::from(inner.height);
        let start = self.state.scroll_offset;
        let end = (start + visible_height).min(self.state.cards.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|row| {
                let card = self.state.cards.get(row)?;
                Some(self.render_card(card, row == self.state.cursor))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

/// The reveal-more affordance below the list
pub struct ShowMore<'a> {
    remaining: usize,
    theme: &'a Theme,
}

impl<'a> ShowMore<'a> {
    #[must_use]
    pub const fn new(remaining: usize, theme: &'a Theme) -> Self {
        Self { remaining, theme }
    }

    /// Whether the affordance is enabled
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.remaining > 0
    }
}

impl Widget for ShowMore<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text, style) = if self.enabled() {
            (
                format!("[ Show more ({}) ]", self.remaining),
                self.theme.cursor_style(),
            )
        } else {
            ("[ Show more (0) ]".to_string(), self.theme.disabled_style())
        };
        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
