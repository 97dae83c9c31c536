use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use regview_core::view_models::ArtifactDetailViewModel;

use super::type_code_to_color;
use crate::presentation::formatters::badge_line;

pub struct ArtifactDetailView<'a> {
    model: &'a ArtifactDetailViewModel,
}

impl<'a> ArtifactDetailView<'a> {
    pub fn new(model: &'a ArtifactDetailViewModel) -> Self {
        Self { model }
    }
}

fn field_line<'a>(name: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<13}", name), Style::default().fg(Color::DarkGray)),
        value,
    ])
}

impl Widget for ArtifactDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;
        let indicator = &model.type_indicator;

        let description = if model.description.is_empty() {
            Span::styled("No description", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(model.description.as_str())
        };
        let labels = if model.labels.is_empty() {
            Span::styled("None", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(badge_line(&model.labels), Style::default().fg(Color::Magenta))
        };

        let lines = vec![
            field_line("ID", Span::raw(model.id.as_str())),
            field_line(
                "Type",
                Span::styled(
                    format!("{} ({})", indicator.label, indicator.code),
                    Style::default().fg(type_code_to_color(&indicator.code)),
                ),
            ),
            field_line("Description", description),
            field_line("Labels", labels),
            Line::raw(""),
            Line::from(Span::styled(
                format!("[Esc] {}", model.back.label),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Detail screen for an id the source no longer knows
pub struct ArtifactMissingView<'a> {
    id: &'a str,
}

impl<'a> ArtifactMissingView<'a> {
    pub fn new(id: &'a str) -> Self {
        Self { id }
    }
}

impl Widget for ArtifactMissingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                format!("Artifact '{}' not found", self.id),
                Style::default().fg(Color::Red),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "[Esc] Back to artifacts",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{contains, render_lines};
    use regview_core::presenters::present_artifact_detail;
    use regview_testing::fixtures::sample_artifacts;

    #[test]
    fn test_detail_fields() {
        let artifacts = sample_artifacts();
        let model = present_artifact_detail(&artifacts[3]);
        let lines = render_lines(ArtifactDetailView::new(&model), 60, 10);

        assert!(contains(&lines, "Audit Log"));
        assert!(contains(&lines, "ID           audit-log"));
        assert!(contains(&lines, "JSON Schema (JSON)"));
        assert!(contains(&lines, "No description"));
        assert!(contains(&lines, "#auth #compliance"));
        assert!(contains(&lines, "[Esc] Back to artifacts"));
    }

    #[test]
    fn test_missing_artifact() {
        let lines = render_lines(ArtifactMissingView::new("gone"), 40, 5);
        assert!(contains(&lines, "Artifact 'gone' not found"));
    }
}
