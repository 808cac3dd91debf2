//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to [`Command`] values. Keys go to the
//! topmost open overlay, or to the book list when none is open.

use super::state::{AppState, Command};
use crate::ui::panels::Panel;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of polling for an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// No event arrived before the timeout
    Continue,
    /// The event was mapped to a command and dispatched
    Dispatched(Command),
    /// No action taken
    Ignored,
}

/// Map a key press to a command for the current input target
#[must_use]
pub fn command_for_key(state: &AppState, key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match state.overlays.topmost() {
        None => handle_list_key(key),
        // Any key closes help
        Some(Panel::Help) => Some(Command::Close(Panel::Help)),
        Some(Panel::Detail) => handle_detail_key(key),
        Some(Panel::Settings) => handle_settings_key(key),
        Some(Panel::Search) => handle_search_key(key),
    }
}

/// Handle keys while the book list has focus
fn handle_list_key(key: KeyEvent) -> Option<Command> {
    let command = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => Command::Quit,

        // Navigation
        (KeyCode::Up | KeyCode::Char('k'), _) => Command::CursorUp,
        (KeyCode::Down | KeyCode::Char('j'), _) => Command::CursorDown,
        (KeyCode::PageUp, _) => Command::PageUp,
        (KeyCode::PageDown, _) => Command::PageDown,
        (KeyCode::Home | KeyCode::Char('g'), _) => Command::Home,
        (KeyCode::End | KeyCode::Char('G'), _) => Command::End,

        // Panels
        (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::Char('/'), _) => {
            Command::Open(Panel::Search)
        }
        (KeyCode::Char('s'), _) => Command::Open(Panel::Settings),
        (KeyCode::F(1) | KeyCode::Char('?'), _) => Command::Open(Panel::Help),

        // Actions
        (KeyCode::Enter, _) => Command::ShowDetail,
        (KeyCode::Char('m'), _) => Command::RevealMore,
        (KeyCode::Char('o'), _) => Command::OpenCover,
        (KeyCode::Char('t'), _) => Command::ToggleTheme,

        _ => return None,
    };
    Some(command)
}

fn handle_detail_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Command::Close(Panel::Detail)),
        KeyCode::Char('o') => Some(Command::OpenCover),
        _ => None,
    }
}

fn handle_settings_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            Some(Command::Close(Panel::Settings))
        }
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::BackTab => {
            Some(Command::SettingsPrev)
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Tab => {
            Some(Command::SettingsNext)
        }
        _ => None,
    }
}

/// Handle keys while the search form has focus
fn handle_search_key(key: KeyEvent) -> Option<Command> {
    let command = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Command::Close(Panel::Search),
        (KeyCode::Enter, _) => Command::SubmitSearch,
        (KeyCode::Tab | KeyCode::Down, _) => Command::SearchNextField,
        (KeyCode::BackTab | KeyCode::Up, _) => Command::SearchPrevField,
        (KeyCode::Left, _) => Command::SearchPrevOption,
        (KeyCode::Right, _) => Command::SearchNextOption,
        (KeyCode::Backspace, _) => Command::SearchBackspace,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Command::SearchClear,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Command::SearchInput(c),
        _ => return None,
    };
    Some(command)
}

/// Map a mouse event to a command
///
/// Clicks on a list row select that row's book; clicks on the footer
/// reveal more. While an overlay is open only scrolling reaches the list.
#[must_use]
pub fn command_for_mouse(state: &AppState, mouse: MouseEvent) -> Option<Command> {
    match mouse.kind {
        _ if state.overlays.any_open() => None,
        MouseEventKind::ScrollUp => Some(Command::CursorUp),
        MouseEventKind::ScrollDown => Some(Command::CursorDown),
        MouseEventKind::Down(MouseButton::Left) => {
            if state.footer_contains(mouse.column, mouse.row) {
                return Some(Command::RevealMore);
            }
            let row = state.row_at(mouse.column, mouse.row)?;
            let card = state.cards.get(row)?;
            Some(Command::Select(card.id().to_string()))
        }
        _ => None,
    }
}

/// Poll for events and dispatch the resulting command
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let command = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => command_for_key(state, key),
        Event::Mouse(mouse) => command_for_mouse(state, mouse),
        Event::Resize(_, _) => return Ok(EventResult::Continue),
        _ => None,
    };

    Ok(match command {
        Some(command) => {
            state.dispatch(command.clone());
            EventResult::Dispatched(command)
        }
        None => EventResult::Ignored,
    })
}
