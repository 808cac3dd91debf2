//! Ratatui-based catalog browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               BrowserApp                    │
//! │      (terminal setup + event loop)          │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (dispatch) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Events are translated to [`Command`] values and applied one at a time by
//! [`AppState::dispatch`]; rendering reads the state and never mutates the
//! catalog controller.

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{BrowserApp, render};
pub use events::{EventResult, command_for_key, command_for_mouse, poll_and_handle};
pub use state::{AppState, Command};
pub use theme::Theme;
