use serde::Serialize;

use super::artifact_list::TypeIndicatorViewModel;
use super::common::NavActionViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactDetailViewModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub type_indicator: TypeIndicatorViewModel,
    pub labels: Vec<String>,
    pub back: NavActionViewModel,
}
