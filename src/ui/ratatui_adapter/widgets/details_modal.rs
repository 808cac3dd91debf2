//! Details modal widget for displaying the selected book

use super::centered_rect;
use crate::browse::DetailView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Details modal widget that displays a book's cover, title, byline and description
pub struct DetailsModal<'a> {
    /// Book details to display
    details: &'a DetailView,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub const fn new(details: &'a DetailView, theme: &'a Theme) -> Self {
        Self { details, theme }
    }

    /// Build content lines for the modal
    fn build_content(&self, width: usize) -> Vec<Line<'static>> {
        let rule = "─".repeat(width);
        let mut lines = vec![
            Line::styled(self.details.title.clone(), self.theme.title_style()),
            Line::styled(self.details.subtitle.clone(), self.theme.author_style()),
            Line::from(rule.clone()),
            Line::default(),
            Line::from(vec![
                Span::styled("Cover:  ", self.theme.dimmed_style()),
                Span::styled(
                    self.details.image.clone(),
                    self.theme
                        .info_style()
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
        ];

        if !self.details.genres.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Genres: ", self.theme.dimmed_style()),
                Span::styled(self.details.genres.join(", "), self.theme.genre_style()),
            ]));
        }

        lines.push(Line::default());
        lines.extend(
            self.details
                .description
                .lines()
                .map(|line| Line::from(line.to_string())),
        );

        lines.push(Line::default());
        lines.push(Line::from(rule));
        lines.push(Line::styled(
            "o: open cover | Esc: close",
            self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
        ));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(70, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .style(self.theme.base_style())
            .title(" Book Details ")
            .title_alignment(Alignment::Center);

        let width = usize::from(popup_area.width.saturating_sub(2));
        let content = self.build_content(width);
        Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn view() -> DetailView {
        DetailView {
            id: "dune".to_string(),
            image: "https://covers.example.org/dune.jpg".to_string(),
            title: "Dune".to_string(),
            subtitle: "Frank Herbert (1965)".to_string(),
            description: "Desert planet.".to_string(),
            genres: vec!["Science Fiction".to_string()],
        }
    }

    #[test]
    fn test_details_modal_renders_view() {
        let details = view();
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| frame.render_widget(DetailsModal::new(&details, &theme), frame.area()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(content.contains("Book Details"));
        assert!(content.contains("Frank Herbert (1965)"));
        assert!(content.contains("Desert planet."));
        assert!(content.contains("Science Fiction"));
    }
}
