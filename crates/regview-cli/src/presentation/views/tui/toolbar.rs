use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use regview_core::Focus;
use regview_core::view_models::ToolbarViewModel;

use crate::presentation::formatters::sort_glyph;

const FILTER_PLACEHOLDER: &str = "Filter...";

pub struct ToolbarView<'a> {
    model: &'a ToolbarViewModel,
    focus: Focus,
}

impl<'a> ToolbarView<'a> {
    pub fn new(model: &'a ToolbarViewModel, focus: Focus) -> Self {
        Self { model, focus }
    }

    fn filter_spans(&self) -> Vec<Span<'a>> {
        let editing = self.focus == Focus::FilterInput;
        let mut spans = vec![Span::styled("/ ", Style::default().fg(Color::DarkGray))];

        if self.model.filter_text.is_empty() && !editing {
            spans.push(Span::styled(
                FILTER_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            let style = if editing {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            spans.push(Span::styled(self.model.filter_text.as_str(), style));
        }
        if editing {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        spans
    }
}

impl Widget for ToolbarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focus == Focus::List {
            Color::DarkGray
        } else {
            Color::Yellow
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let count_width = self.model.count_text.chars().count() as u16;
        let [controls_area, count_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(count_width + 1)])
                .areas(inner);

        let dropdown_style = if self.focus == Focus::Dropdown {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![
            Span::styled("[f] ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} ▾", self.model.dropdown_label), dropdown_style),
            Span::raw("  "),
        ];
        spans.extend(self.filter_spans());
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[s] ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            sort_glyph(self.model.sort_icon),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(Line::from(spans)).render(controls_area, buf);

        Paragraph::new(Span::styled(
            self.model.count_text.as_str(),
            Style::default().fg(Color::Green),
        ))
        .render(count_area, buf);
    }
}

/// Open dropdown overlay listing the filterable fields
pub struct DropdownView<'a> {
    model: &'a ToolbarViewModel,
    cursor: usize,
}

impl<'a> DropdownView<'a> {
    pub fn new(model: &'a ToolbarViewModel, cursor: usize) -> Self {
        Self { model, cursor }
    }

    /// Rows needed including borders
    pub fn height(&self) -> u16 {
        self.model.dropdown_items.len() as u16 + 2
    }
}

impl Widget for DropdownView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let items: Vec<ListItem> = self
            .model
            .dropdown_items
            .iter()
            .map(|item| ListItem::new(item.label.as_str()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Filter by")
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
