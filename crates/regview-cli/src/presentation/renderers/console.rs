use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::Write;

use crate::presentation::formatters::{badge_line, sort_glyph};
use crate::presentation::view_models::ListCommandViewModel;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render_list(&self, view_model: &ListCommandViewModel) -> Result<()> {
        let stdout = std::io::stdout();
        let color = stdout.is_terminal();
        let mut out = stdout.lock();

        match self.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(view_model)?)?,
            OutputFormat::Plain => out.write_all(format_list(view_model, color).as_bytes())?,
        }
        out.flush()?;
        Ok(())
    }
}

pub fn format_list(view_model: &ListCommandViewModel, color: bool) -> String {
    let toolbar = &view_model.toolbar;
    let mut output = String::new();

    let query = if toolbar.filter_text.is_empty() {
        String::new()
    } else {
        format!(" \"{}\"", toolbar.filter_text)
    };
    let summary = format!(
        "Filter: {}{}  {}  {}",
        toolbar.dropdown_label,
        query,
        sort_glyph(toolbar.sort_icon),
        toolbar.count_text
    );
    if color {
        output.push_str(&format!("{}\n", summary.dimmed()));
    } else {
        output.push_str(&summary);
        output.push('\n');
    }

    for row in &view_model.rows {
        output.push('\n');
        let code = format!("[{}]", row.type_indicator.code);
        if color {
            output.push_str(&format!(
                "{} {} ({})\n",
                code.cyan(),
                row.title.bold(),
                row.key
            ));
        } else {
            output.push_str(&format!("{} {} ({})\n", code, row.title, row.key));
        }

        if !row.description.is_empty() {
            output.push_str(&format!("    {}\n", row.description));
        }
        if !row.badges.is_empty() {
            let badges = badge_line(&row.badges);
            if color {
                output.push_str(&format!("    {}\n", badges.magenta()));
            } else {
                output.push_str(&format!("    {}\n", badges));
            }
        }
        output.push_str(&format!("    {}: {}\n", row.action.label, row.action.route));
    }

    output
}
