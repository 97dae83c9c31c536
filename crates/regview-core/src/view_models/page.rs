use serde::Serialize;

use super::artifact_list::ArtifactListViewModel;
use super::header::HeaderViewModel;
use super::toolbar::ToolbarViewModel;
use crate::page::Focus;

/// Everything the artifacts screen shows, composed from its children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactsPageViewModel {
    pub header: HeaderViewModel,
    pub toolbar: ToolbarViewModel,
    pub list: ArtifactListViewModel,
    pub chrome: PageChromeViewModel,
}

/// Page-owned UI state as rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageChromeViewModel {
    pub focus: Focus,
    pub selected_row: Option<usize>,
    pub dropdown_cursor: usize,
    pub error_message: Option<String>,
}
