//! Ratatui-based catalog browser
//!
//! Owns the terminal for the duration of a session and runs the
//! draw/poll/dispatch loop over an [`AppState`].

use super::events::poll_and_handle;
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{
    BookList, DetailsModal, FilterBar, HelpBar, HelpOverlay, SearchOverlay, SettingsOverlay,
    ShowMore, StatusBar,
};
use crate::ui::error::Result;
use crate::ui::panels::Panel;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::Block,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long to wait for input before redrawing (expires status messages)
const TICK: Duration = Duration::from_millis(250);

/// Interactive catalog browser
pub struct BrowserApp {
    state: AppState,
}

impl BrowserApp {
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Run the browser until the user quits
    ///
    /// Returns the final state so callers can inspect the session outcome
    /// (for example the theme the user settled on).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn to or polled.
    pub fn run(mut self) -> Result<AppState> {
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = Self::run_loop(&mut terminal, &mut self.state);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result.map(|()| self.state)
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    fn run_loop(
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        while !state.should_exit {
            terminal.draw(|frame| render(frame, state))?;
            poll_and_handle(state, TICK)?;
        }
        Ok(())
    }
}

/// Render the whole browser into a frame
///
/// Also records the list and footer areas on the state so mouse clicks can
/// be mapped back to rows.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let theme = Theme::from_mode(state.theme_mode);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base_style()), area);

    let help_height = u16::from(state.show_hints);
    let main_layout = Layout::vertical([
        Constraint::Length(3),           // Filter bar
        Constraint::Min(3),              // Book list
        Constraint::Length(1),           // Show more
        Constraint::Length(3),           // Status bar
        Constraint::Length(help_height), // Help bar
    ])
    .split(area);

    state.list_area = main_layout[1];
    state.footer_area = main_layout[2];
    state.visible_height = usize::from(main_layout[1].height.saturating_sub(2));
    state.ensure_cursor_visible();

    let state = &*state;

    frame.render_widget(
        FilterBar::new(state.controller.query(), state.controller.catalog(), &theme),
        main_layout[0],
    );
    frame.render_widget(BookList::new(state, &theme), main_layout[1]);
    frame.render_widget(
        ShowMore::new(state.controller.remaining(), &theme),
        main_layout[2],
    );

    let message = state.status.latest_message();
    let cli_hint = state.cli_hint();
    let status_bar = StatusBar::new(
        message.as_ref(),
        &theme,
        state.cards.len(),
        state.controller.result_count(),
    )
    .with_cli_hint(cli_hint.as_deref());
    frame.render_widget(status_bar, main_layout[3]);

    if state.show_hints {
        let hints = HelpBar::hints_for(state.overlays.topmost());
        frame.render_widget(HelpBar::new(&hints, &theme), main_layout[4]);
    }

    render_overlays(frame, state, &theme);
}

/// Render open overlays bottom to top
fn render_overlays(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let topmost = state.overlays.topmost();
    for panel in state.overlays.open_panels() {
        let focused = topmost == Some(panel);
        match panel {
            Panel::Search => {
                let overlay = SearchOverlay::new(&state.search, theme).focused(focused);
                frame.render_widget(overlay, frame.area());
            }
            Panel::Settings => {
                let overlay = SettingsOverlay::new(&state.settings, theme).focused(focused);
                frame.render_widget(overlay, frame.area());
            }
            Panel::Detail => {
                if let Some(details) = &state.detail {
                    frame.render_widget(DetailsModal::new(details, theme), frame.area());
                }
            }
            Panel::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mixed_catalog, numbered_catalog};
    use crate::theme::ThemeMode;
    use crate::ui::ratatui_adapter::state::Command;
    use ratatui::{backend::TestBackend, buffer::Cell, style::Color};

    fn draw(state: &mut AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
    }

    fn content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_main_screen() {
        let mut state = AppState::new(numbered_catalog(5, 2));
        let terminal = draw(&mut state);
        let content = content(&terminal);

        assert!(content.contains("Books (2/5)"));
        assert!(content.contains("Book 1"));
        assert!(content.contains("Show more (3)"));
        assert!(content.contains("2/5 · Day"));
    }

    #[test]
    fn test_render_records_mouse_areas() {
        let mut state = AppState::new(numbered_catalog(5, 2));
        draw(&mut state);

        assert_eq!(state.list_area.y, 3);
        assert_eq!(state.footer_area.height, 1);
        assert_eq!(state.footer_area.y, state.list_area.bottom());
        assert_eq!(state.visible_height, usize::from(state.list_area.height - 2));
    }

    #[test]
    fn test_render_disabled_footer_when_exhausted() {
        let mut state = AppState::new(numbered_catalog(3, 36));
        let content = content(&draw(&mut state));
        assert!(content.contains("Show more (0)"));
    }

    #[test]
    fn test_render_night_background() {
        let mut state = AppState::new(mixed_catalog(36)).with_theme(ThemeMode::Night);
        let terminal = draw(&mut state);
        let cell = &terminal.backend().buffer()[(0, 0)];
        assert_eq!(cell.bg, Color::Rgb(10, 10, 20));
    }

    #[test]
    fn test_render_detail_over_search() {
        let mut state = AppState::new(mixed_catalog(36));
        state.dispatch(Command::Open(Panel::Search));
        state.dispatch(Command::Select("h".to_string()));

        let content = content(&draw(&mut state));
        assert!(content.contains("Book Details"));
        assert!(content.contains("J.R.R. Tolkien (2000)"));
    }

    #[test]
    fn test_render_without_hints() {
        let mut state = AppState::new(mixed_catalog(36)).with_hints(false);
        let content = content(&draw(&mut state));
        assert!(!content.contains("CLI:"));
        assert!(!content.contains("navigate"));
    }
}
