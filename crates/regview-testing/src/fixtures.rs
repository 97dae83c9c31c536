//! Sample catalogs.

use regview_core::InMemoryCatalog;
use regview_types::{Artifact, ArtifactType};

/// Five artifacts covering descriptions, labels and their absence.
pub fn sample_artifacts() -> Vec<Artifact> {
    vec![
        Artifact::new("user-events", "User Events", ArtifactType::Avro)
            .with_description("Account lifecycle events")
            .with_labels(["pii", "kafka"]),
        Artifact::new("auth-api", "Auth API", ArtifactType::OpenApi)
            .with_description("Token issuing and validation")
            .with_labels(["public"]),
        Artifact::new("billing", "Billing", ArtifactType::Protobuf)
            .with_description("Invoices and payments"),
        Artifact::new("audit-log", "Audit Log", ArtifactType::JsonSchema)
            .with_labels(["auth", "compliance"]),
        Artifact::new("catalog-graph", "Catalog Graph", ArtifactType::GraphQl),
    ]
}

pub fn sample_catalog() -> InMemoryCatalog {
    match InMemoryCatalog::new(sample_artifacts()) {
        Ok(catalog) => catalog,
        Err(err) => panic!("sample artifacts must have unique ids: {}", err),
    }
}

/// Sample catalog as the JSON document `regview` reads.
pub fn sample_catalog_json() -> String {
    let artifacts = serde_json::to_value(sample_artifacts()).unwrap_or_default();
    serde_json::json!({ "artifacts": artifacts }).to_string()
}
