//! Terminal user interface
//!
//! The browser is split into small pieces that do not depend on a terminal:
//!
//! - **`card`** - the per-book display component
//! - **`panels`** - open/closed flags for the overlay panels
//! - **`output`** - user-facing messages for the CLI and the status bar
//!
//! and the ratatui adapter that draws them and feeds input back as
//! commands.
//!
//! ## Output Messages
//!
//! ```
//! use bookr::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Catalog loaded");
//! output.warning("No books match");
//! ```
//!
//! ## Driving the Browser Without a Terminal
//!
//! ```
//! use bookr::catalog::Catalog;
//! use bookr::ui::{AppState, Command};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin()?.with_page_size(10)?;
//! let mut state = AppState::new(catalog);
//! assert_eq!(state.cards.len(), 10);
//!
//! state.dispatch(Command::RevealMore);
//! assert_eq!(state.cards.len(), 20);
//! # Ok(())
//! # }
//! ```

mod error;

pub mod card;
pub mod output;
pub mod panels;
pub mod ratatui_adapter;

pub use card::{BookCard, CardAttribute};
pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
pub use panels::{Overlays, Panel};
pub use ratatui_adapter::{AppState, BrowserApp, Command, Theme};
