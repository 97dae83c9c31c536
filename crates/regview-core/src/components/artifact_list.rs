//! Artifact list: a pure projection of artifacts into rows.

use regview_types::{Artifact, ArtifactType, Route};

use crate::view::{EmptyState, ViewHost, ViewSpec};
use crate::view_models::{
    ArtifactListViewModel, ArtifactRowViewModel, NavActionViewModel, TypeIndicatorViewModel,
};

pub const VIEW_ARTIFACT_LABEL: &str = "View Artifact";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactListProps {
    pub artifacts: Vec<Artifact>,
}

const ARTIFACT_LIST: ViewSpec<ArtifactListProps, EmptyState, ArtifactListViewModel> =
    ViewSpec::new("artifact-list", EmptyState::init, render);

fn render(props: &ArtifactListProps, _state: &EmptyState) -> ArtifactListViewModel {
    ArtifactListViewModel {
        rows: render_rows(&props.artifacts),
    }
}

/// One row per artifact, in input order.
pub fn render_rows(artifacts: &[Artifact]) -> Vec<ArtifactRowViewModel> {
    artifacts.iter().map(render_row).collect()
}

pub fn render_row(artifact: &Artifact) -> ArtifactRowViewModel {
    ArtifactRowViewModel {
        key: artifact.id.clone(),
        type_indicator: type_indicator(artifact.artifact_type),
        title: artifact.name.clone(),
        description: artifact.description().to_string(),
        badges: artifact.labels().to_vec(),
        action: NavActionViewModel::new(
            VIEW_ARTIFACT_LABEL,
            &Route::ArtifactDetail(artifact.id.clone()),
        ),
    }
}

pub fn type_indicator(artifact_type: ArtifactType) -> TypeIndicatorViewModel {
    TypeIndicatorViewModel {
        code: artifact_type.as_str().to_string(),
        label: artifact_type.display_name().to_string(),
    }
}

pub struct ArtifactList {
    host: ViewHost<ArtifactListProps, EmptyState, ArtifactListViewModel>,
}

impl ArtifactList {
    pub fn new(props: ArtifactListProps) -> Self {
        Self {
            host: ARTIFACT_LIST.mount(props),
        }
    }

    pub fn set_artifacts(&mut self, artifacts: Vec<Artifact>) {
        self.host.set_props(ArtifactListProps { artifacts });
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.host.props().artifacts
    }

    pub fn len(&self) -> usize {
        self.host.props().artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.host.props().artifacts.is_empty()
    }

    pub fn view(&mut self) -> &ArtifactListViewModel {
        self.host.view()
    }

    pub fn render_count(&self) -> u64 {
        self.host.render_count()
    }
}

impl Default for ArtifactList {
    fn default() -> Self {
        Self::new(ArtifactListProps::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_labels_render_no_badges() {
        let artifact = Artifact::new("orders", "Orders", ArtifactType::Avro);
        let row = render_row(&artifact);
        assert!(row.badges.is_empty());
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_row_contents() {
        let artifact = Artifact::new("petstore", "Petstore", ArtifactType::OpenApi)
            .with_description("Sample API")
            .with_labels(["public", "v3"]);
        let row = render_row(&artifact);

        assert_eq!(row.key, "petstore");
        assert_eq!(row.title, "Petstore");
        assert_eq!(row.description, "Sample API");
        assert_eq!(row.badges, ["public", "v3"]);
        assert_eq!(row.type_indicator.code, "OPENAPI");
        assert_eq!(row.action.label, "View Artifact");
        assert_eq!(row.action.route, "/artifacts/petstore");
    }

    #[test]
    fn test_rows_keep_input_order() {
        let artifacts = vec![
            Artifact::new("z", "Zeta", ArtifactType::JsonSchema),
            Artifact::new("a", "Alpha", ArtifactType::JsonSchema),
        ];
        let keys: Vec<String> = render_rows(&artifacts).into_iter().map(|r| r.key).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_set_artifacts_rerenders() {
        let mut list = ArtifactList::default();
        assert!(list.view().rows.is_empty());

        list.set_artifacts(vec![Artifact::new("a", "Alpha", ArtifactType::Xsd)]);
        assert_eq!(list.view().rows.len(), 1);
        assert_eq!(list.render_count(), 2);
    }
}
