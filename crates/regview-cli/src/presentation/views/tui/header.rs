use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use regview_core::view_models::HeaderViewModel;

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
    /// Path of the screen on display
    current_path: String,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel, current_path: impl Into<String>) -> Self {
        Self {
            model,
            current_path: current_path.into(),
        }
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let settings_label = format!("[r] {}", self.model.settings.label);
        let [brand_area, settings_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(settings_label.chars().count() as u16 + 1),
        ])
        .areas(inner);

        let brand = Line::from(vec![
            Span::styled(
                self.model.brand_text.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.model.brand_alt),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(brand).render(brand_area, buf);

        let settings_style = if self.current_path == self.model.settings.route {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Span::styled(settings_label, settings_style)).render(settings_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{contains, render_lines};
    use regview_core::NavigationHeader;

    #[test]
    fn test_header_shows_brand_and_settings() {
        let mut header = NavigationHeader::new();
        let lines = render_lines(HeaderView::new(header.view(), "/artifacts"), 60, 2);

        assert!(lines[0].starts_with("Service Registry  Apicurio Registry"));
        assert!(contains(&lines, "[r] Settings"));
    }
}
