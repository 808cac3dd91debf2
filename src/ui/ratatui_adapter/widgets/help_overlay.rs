//! Help overlay widget for displaying the full keybind reference

use super::centered_rect;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 3] {
        [
            Line::default(),
            Line::styled(
                title,
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
        ]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(self.section("  Browsing"));
        lines.extend([
            self.help_line("  ↑/↓", "Move cursor"),
            self.help_line("  PgUp/PgDn", "Page up/down"),
            self.help_line("  Home/End", "Jump to start/end"),
            self.help_line("  Enter", "Show book details"),
            self.help_line("  m", "Show more results"),
            self.help_line("  o", "Open cover image"),
            self.help_line("  t", "Toggle day/night"),
        ]);

        lines.extend(self.section("  Panels"));
        lines.extend([
            self.help_line("  / or Ctrl+F", "Search by title, author, genre"),
            self.help_line("  s", "Settings"),
            self.help_line("  ? or F1", "This help"),
            self.help_line("  Esc", "Close topmost panel"),
            self.help_line("  q or Ctrl+C", "Quit"),
        ]);

        lines.extend(self.section("  Mouse"));
        lines.extend([
            self.help_line("  Scroll", "Move cursor"),
            self.help_line("  Click row", "Show book details"),
            self.help_line("  Click footer", "Show more results"),
        ]);

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));

        lines
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<16}"), self.theme.info_style()),
            Span::styled(desc, self.theme.normal_style()),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .style(self.theme.base_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
