//! Status bar widget for displaying messages, result counts and the theme

use crate::theme::ThemeMode;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget
///
/// The left side shows the most recent message, or the equivalent
/// `bookr list` command when there is none. The right side shows how many
/// results are revealed and the active theme.
pub struct StatusBar<'a> {
    /// Latest unexpired message
    message: Option<&'a (MessageLevel, String)>,
    /// Theme for styling
    theme: &'a Theme,
    /// Optional CLI hint for the active query
    cli_hint: Option<&'a str>,
    shown: usize,
    total: usize,
    mode: ThemeMode,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        message: Option<&'a (MessageLevel, String)>,
        theme: &'a Theme,
        shown: usize,
        total: usize,
    ) -> Self {
        Self {
            message,
            theme,
            cli_hint: None,
            shown,
            total,
            mode: theme.mode,
        }
    }

    /// Set CLI hint command
    #[must_use]
    pub const fn with_cli_hint(mut self, hint: Option<&'a str>) -> Self {
        self.cli_hint = hint;
        self
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    /// Build a highlighted line for the CLI hint
    fn build_cli_hint_line(&self, cmd: &str) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "CLI: ".to_string(),
            self.theme.dimmed_style().add_modifier(Modifier::DIM),
        )];

        for (i, part) in cmd.split(' ').enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".to_string()));
            }

            let style = if i == 0 {
                self.theme.cursor_style()
            } else if i == 1 {
                self.theme.author_style()
            } else if part.starts_with("--") {
                self.theme.warning_style()
            } else {
                self.theme.success_style()
            };

            spans.push(Span::styled(part.to_string(), style));
        }

        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(inner);

        if let Some((level, text)) = self.message {
            let style = self.style_for_level(*level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(*level), style),
                Span::styled(text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        } else if let Some(cmd) = self.cli_hint {
            Paragraph::new(self.build_cli_hint_line(cmd)).render(chunks[0], buf);
        }

        let indicator = format!("{}/{} · {}", self.shown, self.total, self.mode.label());
        Paragraph::new(Line::styled(indicator, self.theme.info_style()))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
