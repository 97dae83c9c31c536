use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarViewModel {
    pub dropdown_label: String,
    pub dropdown_open: bool,
    pub dropdown_items: Vec<DropdownItemViewModel>,
    pub filter_text: String,
    pub sort_ascending: bool,
    pub sort_icon: SortIcon,
    /// Empty while the count is unknown
    pub count_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownItemViewModel {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIcon {
    SortAlphaDown,
    SortAlphaDownAlt,
}
