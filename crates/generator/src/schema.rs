//! Schema definition model shared by top-level definitions and their properties

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A schema definition or property schema.
///
/// Only the parts the synthesizer consumes are modelled; everything else in the
/// source document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema type tag (`object`, `array`, `string`, `integer`, ...)
    #[serde(
        rename = "type",
        default,
        deserialize_with = "type_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_type: Option<String>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Object properties, in document order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    /// Names of required properties
    #[serde(
        default,
        deserialize_with = "required_names",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required: Vec<String>,

    /// Cross-schema reference
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Item schema (for arrays)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

/// Classification of a schema for type synthesis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaKind<'a> {
    /// Direct reference to another schema definition
    Reference(&'a str),

    /// Array with an optional item schema
    Array(Option<&'a Schema>),

    /// Object with properties
    Object,

    /// Primitive or untyped schema
    Primitive(Option<&'a str>),
}

impl Schema {
    /// Deserialize a schema from a JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Classify this schema
    pub fn kind(&self) -> SchemaKind<'_> {
        if let Some(reference) = self.reference.as_deref() {
            return SchemaKind::Reference(reference);
        }

        match self.schema_type.as_deref() {
            Some("array") => SchemaKind::Array(self.items.as_deref()),
            Some("object") => SchemaKind::Object,
            None if !self.properties.is_empty() => SchemaKind::Object,
            other => SchemaKind::Primitive(other),
        }
    }

    /// Whether this schema produces an interface file
    pub fn is_object(&self) -> bool {
        matches!(self.kind(), SchemaKind::Object)
    }

    /// Check if a property is required
    pub fn is_property_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }
}

/// Accept a single tag or an OpenAPI 3.1 tag list, taking its first non-null entry
fn type_tag<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let tag = match value {
        serde_json::Value::String(tag) => Some(tag),
        serde_json::Value::Array(tags) => tags
            .into_iter()
            .filter_map(|tag| tag.as_str().map(str::to_string))
            .find(|tag| tag != "null"),
        _ => None,
    };
    Ok(tag)
}

/// Accept a list of names; anything else (e.g. a per-property `required: true`) is treated as empty
fn required_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let names = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_kind() {
        let reference = Schema::from_value(json!({ "$ref": "#/definitions/Tag" })).unwrap();
        assert_eq!(reference.kind(), SchemaKind::Reference("#/definitions/Tag"));

        let array = Schema::from_value(json!({ "type": "array", "items": { "type": "string" } }))
            .unwrap();
        assert!(matches!(array.kind(), SchemaKind::Array(Some(_))));

        let bare_array = Schema::from_value(json!({ "type": "array" })).unwrap();
        assert_eq!(bare_array.kind(), SchemaKind::Array(None));

        let primitive = Schema::from_value(json!({ "type": "integer" })).unwrap();
        assert_eq!(primitive.kind(), SchemaKind::Primitive(Some("integer")));

        let untyped = Schema::from_value(json!({ "description": "anything" })).unwrap();
        assert_eq!(untyped.kind(), SchemaKind::Primitive(None));
    }

    #[test]
    fn test_type_list_takes_first_non_null() {
        let schema = Schema::from_value(json!({ "type": ["null", "string"] })).unwrap();
        assert_eq!(schema.kind(), SchemaKind::Primitive(Some("string")));
    }

    #[test]
    fn test_untyped_schema_with_properties_is_object() {
        let schema = Schema::from_value(json!({
            "properties": { "id": { "type": "integer" } }
        }))
        .unwrap();
        assert!(schema.is_object());
    }

    #[test]
    fn test_properties_keep_document_order() {
        let schema = Schema::from_value(json!({
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "string" },
                "mid": { "type": "string" }
            }
        }))
        .unwrap();

        let names: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_lenient_required() {
        let schema = Schema::from_value(json!({
            "type": "object",
            "required": ["id", 7],
            "properties": {
                "id": { "type": "integer", "required": true }
            }
        }))
        .unwrap();

        assert!(schema.is_property_required("id"));
        assert_eq!(schema.required, vec!["id".to_string()]);
        assert!(schema.properties["id"].required.is_empty());
    }
}
