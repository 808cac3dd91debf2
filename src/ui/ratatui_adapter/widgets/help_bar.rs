//! Help bar widget for displaying keybind hints

use crate::ui::panels::Panel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "/")
    pub key: String,
    /// Action description (e.g., "details", "search")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the given input target (`None` is the book list)
    #[must_use]
    pub fn hints_for(panel: Option<Panel>) -> Vec<KeyHint> {
        match panel {
            None => vec![
                KeyHint::new("↑/↓", "navigate"),
                KeyHint::new("Enter", "details"),
                KeyHint::new("/", "search"),
                KeyHint::new("m", "more"),
                KeyHint::new("s", "settings"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ],
            Some(Panel::Search) => vec![
                KeyHint::new("Tab", "next field"),
                KeyHint::new("←/→", "change"),
                KeyHint::new("Enter", "search"),
                KeyHint::new("Esc", "close"),
            ],
            Some(Panel::Settings) => vec![
                KeyHint::new("↑/↓", "theme"),
                KeyHint::new("Esc", "close"),
            ],
            Some(Panel::Detail) => vec![
                KeyHint::new("o", "open cover"),
                KeyHint::new("Esc", "close"),
            ],
            Some(Panel::Help) => vec![KeyHint::new("any key", "close")],
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::styled(hint.action.as_str(), self.theme.normal_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
