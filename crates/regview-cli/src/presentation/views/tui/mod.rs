//! Stateless ratatui widgets.
//!
//! Each view borrows a view model and maps it onto widgets. No filtering,
//! sorting or counting happens here.

pub mod artifact_list;
pub mod detail;
pub mod header;
pub mod rules;
pub mod status_bar;
pub mod toolbar;

pub use artifact_list::ArtifactListView;
pub use detail::{ArtifactDetailView, ArtifactMissingView};
pub use header::HeaderView;
pub use rules::RulesView;
pub use status_bar::StatusBarView;
pub use toolbar::{DropdownView, ToolbarView};

use ratatui::style::Color;

/// Color of a type indicator badge
pub(crate) fn type_code_to_color(code: &str) -> Color {
    match code {
        "AVRO" => Color::Cyan,
        "PROTOBUF" | "PROTOBUF_FD" => Color::Green,
        "JSON" => Color::Yellow,
        "OPENAPI" | "ASYNCAPI" => Color::Magenta,
        "GRAPHQL" => Color::LightRed,
        "KCONNECT" => Color::Blue,
        _ => Color::Gray,
    }
}
