use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Settings screen reached from the header
pub struct RulesView;

impl Widget for RulesView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::raw("Global rules apply to every artifact in the registry."),
            Line::raw("They are managed on the registry server and are read-only here."),
            Line::raw(""),
            Line::from(Span::styled(
                "[Esc] Back to artifacts",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Global Rules"))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
