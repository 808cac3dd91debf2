//! Search overlay for editing the title, author and genre filters
//!
//! The form holds a free-text title field and two selectors. Each selector
//! offers an "all" option followed by one option per mapping entry, in the
//! order the catalog lists them.

use super::centered_rect;
use crate::browse::{Choice, FilterQuery};
use crate::catalog::Directory;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Fields of the search form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Genre => "Genre",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Title, Self::Author, Self::Genre]
    }

    /// Next field (wrapping)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    /// Previous field (wrapping)
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}

/// A single-choice selector over a mapping plus an "all" option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    options: Vec<(Choice, String)>,
    index: usize,
}

impl Selector {
    /// Build a selector from a mapping; the first option is `all_label`
    #[must_use]
    pub fn new(all_label: &str, directory: &Directory) -> Self {
        let options = std::iter::once((Choice::Any, all_label.to_string()))
            .chain(
                directory
                    .iter()
                    .map(|(id, name)| (Choice::Only(id.to_string()), name.to_string())),
            )
            .collect();
        Self { options, index: 0 }
    }

    /// Options as (choice, label), "all" first
    #[must_use]
    pub fn options(&self) -> &[(Choice, String)] {
        &self.options
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The currently selected choice
    #[must_use]
    pub fn choice(&self) -> Choice {
        self.options
            .get(self.index)
            .map(|(choice, _)| choice.clone())
            .unwrap_or_default()
    }

    /// Label of the currently selected option
    #[must_use]
    pub fn label(&self) -> &str {
        self.options
            .get(self.index)
            .map_or("", |(_, label)| label.as_str())
    }

    /// Select the option matching `choice`; unknown choices select "all"
    pub fn select(&mut self, choice: &Choice) {
        self.index = self
            .options
            .iter()
            .position(|(option, _)| option == choice)
            .unwrap_or(0);
    }

    /// Move to the next option (wrapping)
    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + 1) % self.options.len();
        }
    }

    /// Move to the previous option (wrapping)
    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + self.options.len() - 1) % self.options.len();
        }
    }
}

/// Editable state of the search overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    /// Title filter text
    pub title: String,
    pub author: Selector,
    pub genre: Selector,
    /// Field receiving input
    pub focus: SearchField,
}

impl SearchForm {
    /// Create a form with selectors for the given mappings
    #[must_use]
    pub fn new(authors: &Directory, genres: &Directory) -> Self {
        Self {
            title: String::new(),
            author: Selector::new("All authors", authors),
            genre: Selector::new("All genres", genres),
            focus: SearchField::Title,
        }
    }

    /// The query this form currently describes
    #[must_use]
    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(self.title.clone(), self.author.choice(), self.genre.choice())
    }

    /// Load the values of an existing query into the form
    pub fn load(&mut self, query: &FilterQuery) {
        self.title.clone_from(&query.title);
        self.author.select(&query.author);
        self.genre.select(&query.genre);
    }

    /// Type a character into the title field
    ///
    /// Ignored unless the title field has focus.
    pub fn push_char(&mut self, c: char) {
        if self.focus == SearchField::Title {
            self.title.push(c);
        }
    }

    /// Delete the last character of the title field
    pub fn backspace(&mut self) {
        if self.focus == SearchField::Title {
            self.title.pop();
        }
    }

    pub fn clear_title(&mut self) {
        self.title.clear();
    }

    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub const fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Advance the focused selector; no-op on the title field
    pub fn option_next(&mut self) {
        match self.focus {
            SearchField::Title => {}
            SearchField::Author => self.author.next(),
            SearchField::Genre => self.genre.next(),
        }
    }

    /// Step back the focused selector; no-op on the title field
    pub fn option_prev(&mut self) {
        match self.focus {
            SearchField::Title => {}
            SearchField::Author => self.author.prev(),
            SearchField::Genre => self.genre.prev(),
        }
    }
}

/// Search overlay widget
pub struct SearchOverlay<'a> {
    form: &'a SearchForm,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchOverlay<'a> {
    #[must_use]
    pub const fn new(form: &'a SearchForm, theme: &'a Theme) -> Self {
        Self {
            form,
            theme,
            focused: true,
        }
    }

    /// Whether this overlay is the topmost one receiving input
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn field_line(&self, field: SearchField) -> Line<'static> {
        let is_focused = field == self.form.focus;
        let style = if is_focused {
            self.theme.cursor_style()
        } else {
            self.theme.normal_style()
        };
        let prefix = if is_focused { "▶ " } else { "  " };

        let value = match field {
            SearchField::Title if self.form.title.is_empty() && !is_focused => {
                Span::styled("(any title)", self.theme.dimmed_style())
            }
            SearchField::Title => {
                let cursor = if is_focused { "█" } else { "" };
                Span::raw(format!("{}{cursor}", self.form.title))
            }
            SearchField::Author => {
                Span::styled(format!("◀ {} ▶", self.form.author.label()), self.theme.author_style())
            }
            SearchField::Genre => {
                Span::styled(format!("◀ {} ▶", self.form.genre.label()), self.theme.genre_style())
            }
        };

        Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:<8}", field.label()), style),
            value,
        ])
    }
}

impl Widget for SearchOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 40, area);

        Clear.render(popup_area, buf);

        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(self.theme.base_style())
            .title(" Search ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Fields
            Constraint::Length(1), // Help
        ])
        .split(inner);

        let fields: Vec<Line> = SearchField::all()
            .into_iter()
            .map(|field| self.field_line(field))
            .collect();
        Paragraph::new(fields).render(chunks[1], buf);

        let help = Paragraph::new("Tab: next field | ←/→: change | Enter: search | Esc: close")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center);
        help.render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{directory, mixed_catalog};
    use ratatui::{Terminal, backend::TestBackend};

    fn form() -> SearchForm {
        let catalog = mixed_catalog(2);
        SearchForm::new(catalog.authors(), catalog.genres())
    }

    #[test]
    fn test_selector_options_follow_mapping_order() {
        let authors = directory(&[("tolkien", "J.R.R. Tolkien"), ("herbert", "Frank Herbert")]);
        let selector = Selector::new("All authors", &authors);

        let labels: Vec<&str> = selector
            .options()
            .iter()
            .map(|(_, label)| label.as_str())
            .collect();
        assert_eq!(labels, vec!["All authors", "J.R.R. Tolkien", "Frank Herbert"]);
        assert_eq!(selector.choice(), Choice::Any);
    }

    #[test]
    fn test_selector_wraps() {
        let authors = directory(&[("a", "A"), ("b", "B")]);
        let mut selector = Selector::new("All", &authors);

        selector.prev();
        assert_eq!(selector.choice(), Choice::Only("b".to_string()));
        selector.next();
        assert_eq!(selector.choice(), Choice::Any);
    }

    #[test]
    fn test_selector_select_unknown_falls_back_to_all() {
        let authors = directory(&[("a", "A")]);
        let mut selector = Selector::new("All", &authors);
        selector.select(&Choice::Only("a".to_string()));
        assert_eq!(selector.index(), 1);

        selector.select(&Choice::Only("zzz".to_string()));
        assert_eq!(selector.index(), 0);
    }

    #[test]
    fn test_form_builds_query() {
        let mut form = form();
        for c in "dune".chars() {
            form.push_char(c);
        }
        form.focus_next();
        form.option_next();
        form.option_next();

        let query = form.query();
        assert_eq!(query.title, "dune");
        assert_eq!(query.author, Choice::Only("herbert".to_string()));
        assert_eq!(query.genre, Choice::Any);
    }

    #[test]
    fn test_typing_only_reaches_title_field() {
        let mut form = form();
        form.focus_next();
        form.push_char('x');
        form.backspace();
        assert!(form.title.is_empty());

        form.focus_prev();
        form.push_char('x');
        assert_eq!(form.title, "x");
    }

    #[test]
    fn test_load_round_trips_query() {
        let mut form = form();
        let query = FilterQuery::all()
            .with_title("Two")
            .with_genre(Choice::Only("fantasy".to_string()));
        form.load(&query);
        assert_eq!(form.query(), query);
    }

    #[test]
    fn test_overlay_renders_fields() {
        let form = form();
        let theme = Theme::default();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| frame.render_widget(SearchOverlay::new(&form, &theme), frame.area()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(content.contains("Search"));
        assert!(content.contains("All authors"));
        assert!(content.contains("All genres"));
    }
}
