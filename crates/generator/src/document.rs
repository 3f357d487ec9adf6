//! OpenAPI/Swagger document parsing

use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::schema::Schema;

/// Serialization format of a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// OpenAPI/Swagger version declared by a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentVersion {
    /// Swagger 2.0 (`definitions`)
    Swagger2,

    /// OpenAPI 3.x (`components.schemas`)
    OpenApi3(String),

    /// No recognizable version field
    Unknown,
}

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    swagger: Option<serde_json::Value>,

    #[serde(default)]
    openapi: Option<serde_json::Value>,

    #[serde(default)]
    definitions: Option<IndexMap<String, serde_json::Value>>,

    #[serde(default)]
    components: Option<RawComponents>,
}

#[derive(Debug, Default, Deserialize)]
struct RawComponents {
    #[serde(default)]
    schemas: Option<IndexMap<String, serde_json::Value>>,
}

/// The schema definitions of one source document
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    /// Declared OpenAPI/Swagger version
    pub version: DocumentVersion,

    /// Schema definitions in document order
    pub definitions: IndexMap<String, Schema>,

    /// Definitions that could not be read, with the reason
    pub skipped: Vec<(String, String)>,
}

impl SchemaDocument {
    /// Parse a document, using `format` when known and otherwise trying JSON then YAML
    pub fn parse(content: &str, format: Option<DocumentFormat>) -> Result<Self> {
        let raw = match format {
            Some(DocumentFormat::Json) => serde_json::from_str::<RawDocument>(content)?,
            Some(DocumentFormat::Yaml) => serde_yaml::from_str::<RawDocument>(content)?,
            None => match serde_json::from_str::<RawDocument>(content) {
                Ok(raw) => raw,
                Err(json_error) => serde_yaml::from_str::<RawDocument>(content).map_err(
                    |yaml_error| {
                        anyhow!(
                            "Failed to parse schema document. JSON error: {}, YAML error: {}",
                            json_error,
                            yaml_error
                        )
                    },
                )?,
            },
        };

        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawDocument) -> Self {
        let version = detect_version(&raw);
        let mut definitions = IndexMap::new();
        let mut skipped = Vec::new();

        let v2 = raw.definitions.unwrap_or_default();
        let v3 = raw
            .components
            .and_then(|components| components.schemas)
            .unwrap_or_default();

        for (name, value) in v2.into_iter().chain(v3) {
            match Schema::from_value(value) {
                Ok(schema) => {
                    debug!("Read schema definition {}", name);
                    definitions.insert(name, schema);
                }
                Err(e) => {
                    warn!("Skipping unreadable schema definition {}: {}", name, e);
                    skipped.push((name, e.to_string()));
                }
            }
        }

        Self {
            version,
            definitions,
            skipped,
        }
    }

    /// Number of definitions that produce an interface
    pub fn object_count(&self) -> usize {
        self.definitions
            .values()
            .filter(|schema| schema.is_object())
            .count()
    }
}

fn detect_version(raw: &RawDocument) -> DocumentVersion {
    if raw.swagger.is_some() {
        return DocumentVersion::Swagger2;
    }

    match &raw.openapi {
        Some(serde_json::Value::String(version)) => DocumentVersion::OpenApi3(version.clone()),
        Some(other) => DocumentVersion::OpenApi3(other.to_string()),
        None => DocumentVersion::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_swagger2_json() {
        let content = r##"{
            "swagger": "2.0",
            "definitions": {
                "Order": {
                    "type": "object",
                    "properties": { "id": { "type": "integer" } }
                },
                "Status": { "type": "string" }
            }
        }"##;

        let document = SchemaDocument::parse(content, Some(DocumentFormat::Json)).unwrap();
        assert_eq!(document.version, DocumentVersion::Swagger2);
        assert_eq!(document.definitions.len(), 2);
        assert_eq!(document.object_count(), 1);
        assert!(document.skipped.is_empty());
    }

    #[test]
    fn test_parse_openapi3_yaml_without_hint() {
        let content = r##"
openapi: 3.0.1
info:
  title: Pets
  version: 1.0.0
paths: {}
components:
  schemas:
    Pet:
      type: object
      required: [name]
      properties:
        name:
          type: string
        tag:
          $ref: '#/components/schemas/Tag'
    Tag:
      type: object
      properties:
        label:
          type: string
"##;

        let document = SchemaDocument::parse(content, None).unwrap();
        assert_eq!(
            document.version,
            DocumentVersion::OpenApi3("3.0.1".to_string())
        );
        let names: Vec<&str> = document.definitions.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Pet", "Tag"]);
        assert!(document.definitions["Pet"].is_property_required("name"));
    }

    #[test]
    fn test_unreadable_definition_is_skipped() {
        let content = r##"{
            "swagger": "2.0",
            "definitions": {
                "Broken": { "type": "object", "properties": 42 },
                "Fine": { "type": "object" }
            }
        }"##;

        let document = SchemaDocument::parse(content, None).unwrap();
        assert_eq!(document.definitions.len(), 1);
        assert_eq!(document.skipped.len(), 1);
        assert_eq!(document.skipped[0].0, "Broken");
    }

    #[test]
    fn test_garbage_fails() {
        assert!(SchemaDocument::parse("{ not json", Some(DocumentFormat::Json)).is_err());
        assert!(SchemaDocument::parse(": : :\n- [", None).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("api.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("api.yml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("api")), None);
    }
}
