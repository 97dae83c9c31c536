//! Conversions from domain records to view models for screens that are not
//! stateful components.

use regview_types::{Artifact, Route};

use crate::components::artifact_list::type_indicator;
use crate::view_models::{ArtifactDetailViewModel, NavActionViewModel};

pub fn present_artifact_detail(artifact: &Artifact) -> ArtifactDetailViewModel {
    ArtifactDetailViewModel {
        id: artifact.id.clone(),
        title: artifact.name.clone(),
        description: artifact.description().to_string(),
        type_indicator: type_indicator(artifact.artifact_type),
        labels: artifact.labels().to_vec(),
        back: NavActionViewModel::new("Back to artifacts", &Route::Artifacts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regview_types::ArtifactType;

    #[test]
    fn test_detail_defaults_missing_fields() {
        let detail = present_artifact_detail(&Artifact::new("x", "X", ArtifactType::Wsdl));
        assert_eq!(detail.description, "");
        assert!(detail.labels.is_empty());
        assert_eq!(detail.type_indicator.label, "WSDL");
        assert_eq!(detail.back.route, "/artifacts");
    }
}
