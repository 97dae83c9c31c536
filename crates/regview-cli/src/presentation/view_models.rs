use regview_core::view_models::{ArtifactRowViewModel, ToolbarViewModel};
use regview_types::FilterCriteria;
use serde::Serialize;

/// Output of `regview list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListCommandViewModel {
    /// The criteria the toolbar emitted last
    pub criteria: FilterCriteria,
    pub count: u64,
    pub toolbar: ToolbarViewModel,
    pub rows: Vec<ArtifactRowViewModel>,
}
