use std::cmp::Ordering;
use std::collections::HashSet;

use regview_types::{Artifact, FilterCriteria, FilterField};
use serde::Deserialize;

use super::{ArtifactSearchResults, ArtifactSource};
use crate::{Error, Result};

/// Accepted catalog document shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Artifact>),
    Wrapped { artifacts: Vec<Artifact> },
}

/// Artifact source backed by an in-memory list.
///
/// Matching is a case-insensitive substring test on the field the criteria
/// names; an empty filter value matches everything. Results are ordered by
/// name (case-insensitive, ties broken by id).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    artifacts: Vec<Artifact>,
}

impl InMemoryCatalog {
    pub fn new(artifacts: Vec<Artifact>) -> Result<Self> {
        let mut seen = HashSet::new();
        for artifact in &artifacts {
            if !seen.insert(artifact.id.as_str()) {
                return Err(Error::DuplicateId(artifact.id.clone()));
            }
        }
        Ok(Self { artifacts })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let artifacts = match serde_json::from_str(content)? {
            CatalogDocument::List(artifacts) => artifacts,
            CatalogDocument::Wrapped { artifacts } => artifacts,
        };
        Self::new(artifacts)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSource for InMemoryCatalog {
    fn fetch(&self, criteria: &FilterCriteria) -> Result<ArtifactSearchResults> {
        let needle = criteria.value.trim().to_lowercase();
        let field = criteria.filter_field();

        let mut artifacts: Vec<Artifact> = self
            .artifacts
            .iter()
            .filter(|artifact| needle.is_empty() || matches(artifact, field, &needle))
            .cloned()
            .collect();

        artifacts.sort_by(|a, b| {
            let ordering = compare_by_name(a, b);
            if criteria.sort_ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        tracing::debug!(
            field = %field,
            value = %criteria.value,
            matched = artifacts.len(),
            total = self.artifacts.len(),
            "catalog query"
        );

        Ok(ArtifactSearchResults {
            count: artifacts.len() as u64,
            artifacts,
        })
    }

    fn get(&self, id: &str) -> Option<Artifact> {
        self.artifacts.iter().find(|a| a.id == id).cloned()
    }
}

fn matches(artifact: &Artifact, field: FilterField, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    let any_label = || artifact.labels().iter().any(|label| contains(label.as_str()));

    match field {
        FilterField::Name => contains(artifact.name.as_str()),
        FilterField::Description => contains(artifact.description()),
        FilterField::Labels => any_label(),
        FilterField::Everything => {
            contains(artifact.name.as_str()) || contains(artifact.description()) || any_label()
        }
    }
}

fn compare_by_name(a: &Artifact, b: &Artifact) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regview_types::ArtifactType;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            Artifact::new("users", "Users", ArtifactType::Avro)
                .with_description("User accounts")
                .with_labels(["pii"]),
            Artifact::new("auth", "Auth Events", ArtifactType::AsyncApi)
                .with_description("Login and logout"),
            Artifact::new("billing", "billing", ArtifactType::Protobuf).with_labels(["finance"]),
        ])
        .unwrap()
    }

    fn ids(results: &ArtifactSearchResults) -> Vec<&str> {
        results.artifacts.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_empty_value_matches_all_sorted_by_name() {
        let results = catalog().fetch(&FilterCriteria::default()).unwrap();
        assert_eq!(results.count, 3);
        assert_eq!(ids(&results), ["auth", "billing", "users"]);
    }

    #[test]
    fn test_descending_order() {
        let results = catalog()
            .fetch(&FilterCriteria::new("", "", false))
            .unwrap();
        assert_eq!(ids(&results), ["users", "billing", "auth"]);
    }

    #[test]
    fn test_field_scoped_matching() {
        let catalog = catalog();

        let by_name = catalog.fetch(&FilterCriteria::new("Name", "USER", true)).unwrap();
        assert_eq!(ids(&by_name), ["users"]);

        let by_description = catalog
            .fetch(&FilterCriteria::new("Description", "login", true))
            .unwrap();
        assert_eq!(ids(&by_description), ["auth"]);

        let by_label = catalog
            .fetch(&FilterCriteria::new("Labels", "fin", true))
            .unwrap();
        assert_eq!(ids(&by_label), ["billing"]);

        let nothing = catalog
            .fetch(&FilterCriteria::new("Name", "finance", true))
            .unwrap();
        assert_eq!(nothing.count, 0);
    }

    #[test]
    fn test_everything_searches_all_fields() {
        let results = catalog()
            .fetch(&FilterCriteria::new("", "pii", true))
            .unwrap();
        assert_eq!(ids(&results), ["users"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = InMemoryCatalog::new(vec![
            Artifact::new("a", "One", ArtifactType::JsonSchema),
            Artifact::new("a", "Two", ArtifactType::JsonSchema),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_from_json_accepts_both_shapes() {
        let list = r#"[{"id":"a","name":"A","type":"XML"}]"#;
        let wrapped = r#"{"artifacts":[{"id":"a","name":"A","type":"XML"}]}"#;
        assert_eq!(InMemoryCatalog::from_json(list).unwrap().len(), 1);
        assert_eq!(InMemoryCatalog::from_json(wrapped).unwrap().len(), 1);

        let err = InMemoryCatalog::from_json("{").unwrap_err();
        assert!(matches!(err, Error::CatalogParse(_)));
    }
}
