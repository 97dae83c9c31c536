use serde::{Deserialize, Serialize};
use std::fmt;

/// Artifact format stored by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactType {
    #[serde(rename = "AVRO")]
    Avro,
    #[serde(rename = "PROTOBUF")]
    Protobuf,
    #[serde(rename = "PROTOBUF_FD")]
    ProtobufDescriptor,
    #[serde(rename = "JSON")]
    JsonSchema,
    #[serde(rename = "OPENAPI")]
    OpenApi,
    #[serde(rename = "ASYNCAPI")]
    AsyncApi,
    #[serde(rename = "GRAPHQL")]
    GraphQl,
    #[serde(rename = "KCONNECT")]
    KafkaConnect,
    #[serde(rename = "WSDL")]
    Wsdl,
    #[serde(rename = "XSD")]
    Xsd,
    #[serde(rename = "XML")]
    Xml,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 11] = [
        ArtifactType::Avro,
        ArtifactType::Protobuf,
        ArtifactType::ProtobufDescriptor,
        ArtifactType::JsonSchema,
        ArtifactType::OpenApi,
        ArtifactType::AsyncApi,
        ArtifactType::GraphQl,
        ArtifactType::KafkaConnect,
        ArtifactType::Wsdl,
        ArtifactType::Xsd,
        ArtifactType::Xml,
    ];

    /// Registry wire name (e.g. `PROTOBUF_FD`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Avro => "AVRO",
            ArtifactType::Protobuf => "PROTOBUF",
            ArtifactType::ProtobufDescriptor => "PROTOBUF_FD",
            ArtifactType::JsonSchema => "JSON",
            ArtifactType::OpenApi => "OPENAPI",
            ArtifactType::AsyncApi => "ASYNCAPI",
            ArtifactType::GraphQl => "GRAPHQL",
            ArtifactType::KafkaConnect => "KCONNECT",
            ArtifactType::Wsdl => "WSDL",
            ArtifactType::Xsd => "XSD",
            ArtifactType::Xml => "XML",
        }
    }

    /// Human readable format name
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactType::Avro => "Avro Schema",
            ArtifactType::Protobuf => "Protobuf Schema",
            ArtifactType::ProtobufDescriptor => "Protobuf File Descriptor",
            ArtifactType::JsonSchema => "JSON Schema",
            ArtifactType::OpenApi => "OpenAPI",
            ArtifactType::AsyncApi => "AsyncAPI",
            ArtifactType::GraphQl => "GraphQL",
            ArtifactType::KafkaConnect => "Kafka Connect Schema",
            ArtifactType::Wsdl => "WSDL",
            ArtifactType::Xsd => "XML Schema",
            ArtifactType::Xml => "XML",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored schema/document record exposed by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl Artifact {
    pub fn new(id: impl Into<String>, name: impl Into<String>, artifact_type: ArtifactType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            artifact_type,
            labels: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Labels for display; an absent labels field is treated as no labels.
    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
