use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line key hints, replaced by the error message when there is one
pub struct StatusBarView<'a> {
    hints: &'a [(&'a str, &'a str)],
    error: Option<&'a str>,
}

impl<'a> StatusBarView<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], error: Option<&'a str>) -> Self {
        Self { hints, error }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(error) = self.error {
            Paragraph::new(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .render(area, buf);
            return;
        }

        let mut spans = Vec::with_capacity(self.hints.len() * 2);
        for (key, action) in self.hints {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            spans.push(Span::styled(
                format!(" {}  ", action),
                Style::default().fg(Color::Gray),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
