use serde::Serialize;

use super::common::NavActionViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactListViewModel {
    pub rows: Vec<ArtifactRowViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRowViewModel {
    /// Artifact id; unique within one list
    pub key: String,
    pub type_indicator: TypeIndicatorViewModel,
    pub title: String,
    pub description: String,
    pub badges: Vec<String>,
    pub action: NavActionViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeIndicatorViewModel {
    pub code: String,
    pub label: String,
}
