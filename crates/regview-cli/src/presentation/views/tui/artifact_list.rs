use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use regview_core::view_models::{ArtifactListViewModel, ArtifactRowViewModel};

use super::type_code_to_color;
use crate::presentation::formatters::{badge_line, truncate};

const DESCRIPTION_MAX_CHARS: usize = 96;

pub struct ArtifactListView<'a> {
    model: &'a ArtifactListViewModel,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> ArtifactListView<'a> {
    pub fn new(model: &'a ArtifactListViewModel, selected: Option<usize>, focused: bool) -> Self {
        Self {
            model,
            selected,
            focused,
        }
    }

    fn row_item(row: &'a ArtifactRowViewModel) -> ListItem<'a> {
        let mut title = vec![
            Span::styled(
                format!("[{}]", row.type_indicator.code),
                Style::default().fg(type_code_to_color(&row.type_indicator.code)),
            ),
            Span::raw(" "),
            Span::styled(
                row.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if !row.badges.is_empty() {
            title.push(Span::raw("  "));
            title.push(Span::styled(
                badge_line(&row.badges),
                Style::default().fg(Color::Magenta),
            ));
        }

        let detail = Line::from(vec![
            Span::raw("    "),
            Span::styled(
                truncate(&row.description, DESCRIPTION_MAX_CHARS),
                Style::default().fg(Color::Gray),
            ),
        ]);

        ListItem::new(Text::from(vec![Line::from(title), detail]))
    }
}

impl Widget for ArtifactListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Artifacts")
            .border_style(Style::default().fg(border_color));

        if self.model.rows.is_empty() {
            Paragraph::new(Span::styled(
                "No artifacts found",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.model.rows.iter().map(Self::row_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{contains, render_lines};
    use regview_core::ArtifactList;
    use regview_core::components::ArtifactListProps;
    use regview_testing::fixtures::sample_artifacts;

    #[test]
    fn test_rows_render_indicator_title_badges_and_description() {
        let mut list = ArtifactList::new(ArtifactListProps {
            artifacts: sample_artifacts(),
        });
        let lines = render_lines(ArtifactListView::new(list.view(), Some(0), true), 70, 12);

        assert!(contains(&lines, "> [AVRO] User Events  #pii #kafka"));
        assert!(contains(&lines, "Account lifecycle events"));
        assert!(contains(&lines, "[OPENAPI] Auth API  #public"));
        assert!(contains(&lines, "[PROTOBUF] Billing"));
    }

    #[test]
    fn test_empty_list_message() {
        let mut list = ArtifactList::default();
        let lines = render_lines(ArtifactListView::new(list.view(), None, true), 40, 4);
        assert!(contains(&lines, "No artifacts found"));
    }
}
