//! Settings overlay with the day/night theme selector

use super::centered_rect;
use crate::theme::ThemeMode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Selection state of the settings overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsForm {
    /// Highlighted theme option
    pub theme: ThemeMode,
}

impl SettingsForm {
    #[must_use]
    pub const fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }

    /// Highlight the next theme option (wrapping)
    pub fn next(&mut self) -> ThemeMode {
        let options = ThemeMode::all();
        let index = options.iter().position(|&m| m == self.theme).unwrap_or(0);
        self.theme = options[(index + 1) % options.len()];
        self.theme
    }

    /// Highlight the previous theme option (wrapping)
    pub fn prev(&mut self) -> ThemeMode {
        let options = ThemeMode::all();
        let index = options.iter().position(|&m| m == self.theme).unwrap_or(0);
        self.theme = options[(index + options.len() - 1) % options.len()];
        self.theme
    }
}

/// Settings overlay widget
pub struct SettingsOverlay<'a> {
    form: &'a SettingsForm,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SettingsOverlay<'a> {
    #[must_use]
    pub const fn new(form: &'a SettingsForm, theme: &'a Theme) -> Self {
        Self {
            form,
            theme,
            focused: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SettingsOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(40, 30, area);

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
            .title(" Settings ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Header
            Constraint::Min(2),    // Options
            Constraint::Length(1), // Help
        ])
        .split(inner);

        Paragraph::new(Line::styled("  Theme", self.theme.title_style())).render(chunks[0], buf);

        let options: Vec<Line> = ThemeMode::all()
            .into_iter()
            .map(|mode| {
                let selected = mode == self.form.theme;
                let marker = if selected { "(•) " } else { "( ) " };
                let style = if selected {
                    self.theme.cursor_style()
                } else {
                    self.theme.normal_style()
                };
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(marker, style),
                    Span::styled(mode.label(), style),
                ])
            })
            .collect();
        Paragraph::new(options).render(chunks[1], buf);

        Paragraph::new("↑/↓: choose | Esc: close")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_form_cycles_modes() {
        let mut form = SettingsForm::new(ThemeMode::Day);
        assert_eq!(form.next(), ThemeMode::Night);
        assert_eq!(form.next(), ThemeMode::Day);
        assert_eq!(form.prev(), ThemeMode::Night);
    }
}
