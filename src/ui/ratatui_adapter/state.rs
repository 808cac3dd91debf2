//! Application state for the ratatui TUI
//!
//! Owns the catalog controller together with everything the screen needs:
//! the card list, cursor, overlay flags, form state, theme and status
//! messages. All changes go through [`AppState::dispatch`], one [`Command`]
//! at a time.

use super::widgets::{SearchForm, SettingsForm};
use crate::browse::{CatalogController, DetailView, FilterQuery};
use crate::catalog::Catalog;
use crate::theme::ThemeMode;
use crate::ui::card::BookCard;
use crate::ui::error::{Result, UiError};
use crate::ui::output::{OutputWriter, StatusBarWriter};
use crate::ui::panels::{Overlays, Panel};
use ratatui::layout::{Position, Rect};

/// A user intent, produced by key/mouse handling and applied by `dispatch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Open an overlay panel
    Open(Panel),
    /// Close an overlay panel
    Close(Panel),
    /// Close whichever panel currently receives input
    CloseTopmost,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    SearchNextField,
    SearchPrevField,
    SearchNextOption,
    SearchPrevOption,
    /// Apply the search form as the active filter
    SubmitSearch,
    SettingsNext,
    SettingsPrev,
    SetTheme(ThemeMode),
    ToggleTheme,
    /// Show details for the book under the cursor
    ShowDetail,
    /// Show details for a book by identifier; unknown ids are ignored
    Select(String),
    /// Reveal the next page of results
    RevealMore,
    /// Hand the cover image URI to the system viewer
    OpenCover,
    Quit,
}

/// Application state for the catalog browser
#[derive(Debug)]
pub struct AppState {
    /// Filter, paging and selection logic
    pub controller: CatalogController,
    /// One card per revealed result, in display order
    pub cards: Vec<BookCard>,
    /// Current cursor row in `cards`
    pub cursor: usize,
    /// Scroll offset for the book list
    pub scroll_offset: usize,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Screen area of the book list including its border (set during render)
    pub list_area: Rect,
    /// Screen area of the "Show more" footer (set during render)
    pub footer_area: Rect,
    /// Overlay visibility flags
    pub overlays: Overlays,
    pub search: SearchForm,
    pub settings: SettingsForm,
    /// Book shown by the detail overlay
    pub detail: Option<DetailView>,
    /// Active display mode
    pub theme_mode: ThemeMode,
    /// Transient status messages
    pub status: StatusBarWriter,
    /// Whether to show key hints and the CLI hint
    pub show_hints: bool,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create state for a catalog, showing the first page of all books
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let search = SearchForm::new(catalog.authors(), catalog.genres());
        let controller = CatalogController::new(catalog);

        let mut state = Self {
            controller,
            cards: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // Default, updated during render
            list_area: Rect::default(),
            footer_area: Rect::default(),
            overlays: Overlays::new(),
            search,
            settings: SettingsForm::default(),
            detail: None,
            theme_mode: ThemeMode::default(),
            status: StatusBarWriter::new(),
            show_hints: true,
            should_exit: false,
        };
        state.sync_cards();
        state
    }

    /// Set the initial display mode
    #[must_use]
    pub fn with_theme(mut self, mode: ThemeMode) -> Self {
        self.theme_mode = mode;
        self.settings = SettingsForm::new(mode);
        self
    }

    /// Enable or disable key hints
    #[must_use]
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Apply one command to the state
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::CursorUp => self.cursor_up(),
            Command::CursorDown => self.cursor_down(),
            Command::PageUp => self.page_up(),
            Command::PageDown => self.page_down(),
            Command::Home => self.jump_to_start(),
            Command::End => self.jump_to_end(),
            Command::Open(panel) => self.open_panel(panel),
            Command::Close(panel) => self.close_panel(panel),
            Command::CloseTopmost => {
                if let Some(panel) = self.overlays.topmost() {
                    self.close_panel(panel);
                }
            }
            Command::SearchInput(c) => self.search.push_char(c),
            Command::SearchBackspace => self.search.backspace(),
            Command::SearchClear => self.search.clear_title(),
            Command::SearchNextField => self.search.focus_next(),
            Command::SearchPrevField => self.search.focus_prev(),
            Command::SearchNextOption => self.search.option_next(),
            Command::SearchPrevOption => self.search.option_prev(),
            Command::SubmitSearch => self.submit_search(),
            Command::SettingsNext => {
                let mode = self.settings.next();
                self.set_theme(mode);
            }
            Command::SettingsPrev => {
                let mode = self.settings.prev();
                self.set_theme(mode);
            }
            Command::SetTheme(mode) => self.set_theme(mode),
            Command::ToggleTheme => self.set_theme(self.theme_mode.toggled()),
            Command::ShowDetail => {
                if let Some(id) = self.current_card().map(|card| card.id().to_string()) {
                    self.select(&id);
                }
            }
            Command::Select(id) => self.select(&id),
            Command::RevealMore => self.reveal_more(),
            Command::OpenCover => self.open_cover(),
            Command::Quit => self.should_exit = true,
        }
    }

    /// Card under the cursor
    #[must_use]
    pub fn current_card(&self) -> Option<&BookCard> {
        self.cards.get(self.cursor)
    }

    /// The equivalent `bookr list` command for the active query
    #[must_use]
    pub fn cli_hint(&self) -> Option<String> {
        self.show_hints.then(|| self.controller.query().to_string())
    }

    /// Card row at a screen position inside the list, if any
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.list_inner();
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - inner.y);
        (index < self.cards.len()).then_some(index)
    }

    /// Whether a screen position is on the "Show more" footer
    #[must_use]
    pub fn footer_contains(&self, column: u16, row: u16) -> bool {
        self.footer_area.contains(Position::new(column, row))
    }

    fn list_inner(&self) -> Rect {
        Rect {
            x: self.list_area.x.saturating_add(1),
            y: self.list_area.y.saturating_add(1),
            width: self.list_area.width.saturating_sub(2),
            height: self.list_area.height.saturating_sub(2),
        }
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.ensure_cursor_visible();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.cards.len() {
            self.cursor += 1;
            self.ensure_cursor_visible();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.ensure_cursor_visible();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.cards.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.ensure_cursor_visible();
    }

    /// Jump to first item
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.ensure_cursor_visible();
    }

    /// Jump to last item
    pub fn jump_to_end(&mut self) {
        self.cursor = self.cards.len().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// Adjust scroll offset to keep the cursor visible
    pub fn ensure_cursor_visible(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    fn open_panel(&mut self, panel: Panel) {
        match panel {
            Panel::Search => self.search.load(self.controller.query()),
            Panel::Settings => self.settings = SettingsForm::new(self.theme_mode),
            Panel::Detail if self.detail.is_none() => return,
            Panel::Detail | Panel::Help => {}
        }
        self.overlays.open(panel);
    }

    fn close_panel(&mut self, panel: Panel) {
        self.overlays.close(panel);
        if panel == Panel::Detail {
            self.detail = None;
        }
    }

    fn submit_search(&mut self) {
        let query = self.search.query();
        self.overlays.close(Panel::Search);
        self.submit(query);
    }

    /// Apply a filter directly, bypassing the search form
    ///
    /// Identifiers the form's selectors don't offer are kept as given, so an
    /// unknown author or genre yields an empty result rather than "any".
    pub fn submit(&mut self, query: FilterQuery) {
        self.controller.submit(query);
        self.sync_cards();
        self.cursor = 0;
        self.scroll_offset = 0;

        let count = self.controller.result_count();
        if count == 0 {
            self.status.warning("No books match the filter");
        } else {
            self.status.info(&format!("{count} books match"));
        }
    }

    fn reveal_more(&mut self) {
        let Some(range) = self.controller.reveal_more() else {
            return;
        };
        let catalog = self.controller.catalog();
        self.cards.extend(
            self.controller
                .rendered_range(range)
                .map(|book| BookCard::from_book(book, catalog)),
        );
    }

    fn select(&mut self, id: &str) {
        if let Some(view) = self.controller.select(id) {
            self.detail = Some(view);
            self.overlays.open(Panel::Detail);
        }
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        if self.theme_mode == mode {
            return;
        }
        self.theme_mode = mode;
        self.settings.theme = mode;
        self.status.success(&format!("Theme set to {}", mode.label()));
    }

    fn open_cover(&self) {
        let uri = match &self.detail {
            Some(view) if self.overlays.is_open(Panel::Detail) => view.image.as_str(),
            _ => match self.current_card() {
                Some(card) => card.image(),
                None => return,
            },
        };
        match open_uri(uri) {
            Ok(()) => self.status.info(&format!("Opening {uri}")),
            Err(e) => self.status.error(&e.to_string()),
        }
    }

    /// Bring `cards` in line with the controller's revealed entries
    ///
    /// Existing cards are repointed rather than rebuilt, so rows whose book
    /// did not change are not re-rendered.
    fn sync_cards(&mut self) {
        let catalog = self.controller.catalog();
        self.cards.truncate(self.controller.rendered_count());
        for (row, book) in self.controller.rendered().enumerate() {
            match self.cards.get_mut(row) {
                Some(card) => card.update(book, catalog),
                None => self.cards.push(BookCard::from_book(book, catalog)),
            }
        }
    }
}

fn open_uri(uri: &str) -> Result<()> {
    open::that_detached(uri).map_err(|source| UiError::OpenError {
        uri: uri.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::Choice;
    use crate::testing::{mixed_catalog, numbered_catalog};
    use crate::ui::output::MessageLevel;

    fn ids(state: &AppState) -> Vec<&str> {
        state.cards.iter().map(BookCard::id).collect()
    }

    #[test]
    fn test_initial_state_shows_first_page() {
        let state = AppState::new(numbered_catalog(5, 2));
        assert_eq!(ids(&state), vec!["b1", "b2"]);
        assert_eq!(state.controller.remaining(), 3);
        assert!(!state.overlays.any_open());
        assert_eq!(state.theme_mode, ThemeMode::Day);
    }

    #[test]
    fn test_reveal_more_appends_cards() {
        let mut state = AppState::new(numbered_catalog(5, 2));
        state.dispatch(Command::RevealMore);
        assert_eq!(ids(&state), vec!["b1", "b2", "b3", "b4"]);
        assert_eq!(state.controller.remaining(), 1);

        state.dispatch(Command::RevealMore);
        assert_eq!(state.cards.len(), 5);
        assert_eq!(state.controller.remaining(), 0);

        state.dispatch(Command::RevealMore);
        assert_eq!(state.cards.len(), 5);
    }

    #[test]
    fn test_reveal_more_does_not_rerender_existing_cards() {
        let mut state = AppState::new(numbered_catalog(5, 2));
        let renders = state.cards[0].render_count();
        state.dispatch(Command::RevealMore);
        assert_eq!(state.cards[0].render_count(), renders);
    }

    #[test]
    fn test_submit_search_resets_and_closes_overlay() {
        let mut state = AppState::new(mixed_catalog(1));
        state.dispatch(Command::RevealMore);
        state.dispatch(Command::CursorDown);
        state.dispatch(Command::Open(Panel::Search));
        assert!(state.overlays.is_open(Panel::Search));

        for c in "the".chars() {
            state.dispatch(Command::SearchInput(c));
        }
        state.dispatch(Command::SubmitSearch);

        assert!(!state.overlays.is_open(Panel::Search));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.controller.page(), 1);
        assert_eq!(ids(&state), vec!["h"]);
        assert_eq!(state.controller.result_count(), 3);
        assert_eq!(
            state.status.latest_message(),
            Some((MessageLevel::Info, "3 books match".to_string()))
        );
    }

    #[test]
    fn test_submit_with_no_matches_warns() {
        let mut state = AppState::new(mixed_catalog(2));
        state.search.title = "zzz".to_string();
        state.dispatch(Command::SubmitSearch);

        assert!(state.cards.is_empty());
        assert_eq!(state.status.latest_message().unwrap().0, MessageLevel::Warning);
    }

    #[test]
    fn test_submit_keeps_unknown_author() {
        let mut state = AppState::new(mixed_catalog(2));
        state.submit(FilterQuery::all().with_author(Choice::Only("nobody".to_string())));

        assert_eq!(state.controller.result_count(), 0);
        assert!(state.cards.is_empty());
        assert_eq!(
            state.controller.query().author,
            Choice::Only("nobody".to_string())
        );
        assert_eq!(state.status.latest_message().unwrap().0, MessageLevel::Warning);
    }

    #[test]
    fn test_submit_resets_cursor_and_paging() {
        let mut state = AppState::new(mixed_catalog(2));
        state.dispatch(Command::RevealMore);
        state.dispatch(Command::End);
        assert!(state.cursor > 0);

        state.submit(FilterQuery::all().with_author(Choice::parse("tolkien")));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.controller.page(), 1);
        assert_eq!(ids(&state), vec!["h", "t"]);
    }

    #[test]
    fn test_search_selectors_filter_by_author() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::Open(Panel::Search));
        state.dispatch(Command::SearchNextField);
        state.dispatch(Command::SearchNextOption);
        state.dispatch(Command::SubmitSearch);

        assert_eq!(state.controller.query().author, Choice::Only("tolkien".to_string()));
        assert_eq!(ids(&state), vec!["h", "t"]);
    }

    #[test]
    fn test_opening_search_loads_active_query() {
        let mut state = AppState::new(mixed_catalog(36));
        state.search.title = "dune".to_string();
        state.dispatch(Command::SubmitSearch);

        state.search.title.clear();
        state.dispatch(Command::Open(Panel::Search));
        assert_eq!(state.search.title, "dune");
    }

    #[test]
    fn test_select_opens_detail() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::Select("d".to_string()));

        assert!(state.overlays.is_open(Panel::Detail));
        let detail = state.detail.as_ref().unwrap();
        assert_eq!(detail.title, "Dune");
        assert_eq!(detail.subtitle, "Frank Herbert (2000)");
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::Select("nope".to_string()));

        assert!(!state.overlays.is_open(Panel::Detail));
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_show_detail_uses_cursor_card() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::CursorDown);
        state.dispatch(Command::CursorDown);
        state.dispatch(Command::ShowDetail);

        assert_eq!(state.detail.as_ref().unwrap().id, "t");
    }

    #[test]
    fn test_open_detail_without_selection_is_ignored() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::Open(Panel::Detail));
        assert!(!state.overlays.is_open(Panel::Detail));
    }

    #[test]
    fn test_close_topmost_closes_detail_first() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::Open(Panel::Settings));
        state.dispatch(Command::Select("h".to_string()));

        state.dispatch(Command::CloseTopmost);
        assert!(!state.overlays.is_open(Panel::Detail));
        assert!(state.detail.is_none());
        assert!(state.overlays.is_open(Panel::Settings));

        state.dispatch(Command::CloseTopmost);
        assert!(!state.overlays.any_open());
    }

    #[test]
    fn test_theme_commands() {
        let mut state = AppState::new(mixed_catalog(36)).with_theme(ThemeMode::Night);
        assert_eq!(state.settings.theme, ThemeMode::Night);

        state.dispatch(Command::ToggleTheme);
        assert_eq!(state.theme_mode, ThemeMode::Day);

        state.dispatch(Command::Open(Panel::Settings));
        state.dispatch(Command::SettingsNext);
        assert_eq!(state.theme_mode, ThemeMode::Night);
        assert_eq!(
            state.status.latest_message(),
            Some((MessageLevel::Success, "Theme set to Night".to_string()))
        );

        state.dispatch(Command::SetTheme(ThemeMode::Night));
        assert_eq!(state.status.message_count(), 2);
    }

    #[test]
    fn test_cursor_navigation_and_scroll() {
        let mut state = AppState::new(numbered_catalog(10, 10));
        state.visible_height = 3;

        state.dispatch(Command::CursorUp);
        assert_eq!(state.cursor, 0);

        for _ in 0..4 {
            state.dispatch(Command::CursorDown);
        }
        assert_eq!(state.cursor, 4);
        assert_eq!(state.scroll_offset, 2);

        state.dispatch(Command::End);
        assert_eq!(state.cursor, 9);
        assert_eq!(state.scroll_offset, 7);

        state.dispatch(Command::PageUp);
        assert_eq!(state.cursor, 6);

        state.dispatch(Command::Home);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);

        state.dispatch(Command::PageDown);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_row_at_maps_inside_list_border() {
        let mut state = AppState::new(numbered_catalog(5, 5));
        state.list_area = Rect::new(0, 3, 40, 6);
        state.scroll_offset = 1;

        assert_eq!(state.row_at(5, 3), None);
        assert_eq!(state.row_at(5, 4), Some(1));
        assert_eq!(state.row_at(5, 7), Some(4));
        assert_eq!(state.row_at(5, 8), None);
        assert_eq!(state.row_at(0, 4), None);
    }

    #[test]
    fn test_cli_hint_respects_show_hints() {
        let state = AppState::new(mixed_catalog(36));
        assert_eq!(state.cli_hint().as_deref(), Some("bookr list"));

        let state = AppState::new(mixed_catalog(36)).with_hints(false);
        assert_eq!(state.cli_hint(), None);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::Quit);
        assert!(state.should_exit);
    }
}
