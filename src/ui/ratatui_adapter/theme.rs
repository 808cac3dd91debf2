//! Color theme definitions for the ratatui TUI
//!
//! A `Theme` is derived entirely from a [`ThemeMode`]: the mode's palette
//! supplies the base foreground and background, and the accent colors are
//! chosen to stay readable on that background.

use crate::theme::{Rgb, ThemeMode};
use ratatui::style::{Color, Modifier, Style};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Mode this theme was built from
    pub mode: ThemeMode,
    /// Base text color (palette "dark")
    pub foreground: Color,
    /// Base background color (palette "light")
    pub background: Color,
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for author names
    pub author: Color,
    /// Color for genre labels
    pub genre: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}

impl Theme {
    /// Build the theme for a display mode
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Day => Self::day(),
            ThemeMode::Night => Self::night(),
        }
    }

    /// Dark text on a light background
    #[must_use]
    pub fn day() -> Self {
        let palette = ThemeMode::Day.palette();
        Self {
            mode: ThemeMode::Day,
            foreground: palette.dark.into(),
            background: palette.light.into(),
            selection_bg: Color::Rgb(200, 215, 245),
            selection_fg: palette.dark.into(),
            cursor: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Rgb(180, 110, 0),
            info: Color::Blue,
            border: Color::Gray,
            dimmed: Color::Rgb(110, 110, 120),
            author: Color::Magenta,
            genre: Color::Rgb(0, 120, 120),
        }
    }

    /// Light text on a dark background
    #[must_use]
    pub fn night() -> Self {
        let palette = ThemeMode::Night.palette();
        Self {
            mode: ThemeMode::Night,
            foreground: palette.dark.into(),
            background: palette.light.into(),
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            author: Color::Magenta,
            genre: Color::Cyan,
        }
    }

    /// Base style painted over the whole frame
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Style for the currently highlighted item
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for book titles in headings
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the border of the focused overlay
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for author names
    #[must_use]
    pub fn author_style(&self) -> Style {
        Style::default().fg(self.author)
    }

    /// Style for genre labels
    #[must_use]
    pub fn genre_style(&self) -> Style {
        Style::default().fg(self.genre)
    }

    /// Style for a disabled affordance
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }
}
