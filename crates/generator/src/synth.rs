//! Schema-to-interface synthesis
//!
//! Synthesis is pure: a schema definition goes in, an [`InterfaceModel`] with its
//! import set comes out. Rendering and writing happen in later passes.

use indexmap::IndexSet;
use tracing::debug;

use crate::naming::{to_identifier, to_slug};
use crate::reference::{resolve_ref, PlaceholderKind, ResolvedRef, ANY_TYPE};
use crate::schema::{Schema, SchemaKind};

/// A rendered-type expression for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Another schema definition, by its source type name
    Named(String),

    /// `Array<T>`
    Array(Box<TypeExpr>),

    /// Raw primitive type tag after mapping (`number`, `string`, `boolean`, ...)
    Primitive(String),

    /// Generic `object`
    Object,

    /// Fully unknown `any`
    Any,
}

impl TypeExpr {
    /// Render using source type names, as shown in the `@type` doc tag
    pub fn render(&self) -> String {
        match self {
            TypeExpr::Named(name) => name.clone(),
            TypeExpr::Array(item) => format!("Array<{}>", item.render()),
            TypeExpr::Primitive(tag) => tag.clone(),
            TypeExpr::Object => "object".to_string(),
            TypeExpr::Any => ANY_TYPE.to_string(),
        }
    }

    /// Render as a TypeScript type, with identifier conversion applied to the expression
    pub fn render_identifier(&self) -> String {
        to_identifier(Some(&self.render()))
    }

    fn primitive(tag: Option<&str>) -> Self {
        match tag {
            Some("integer") => TypeExpr::Primitive("number".to_string()),
            Some(tag) if !tag.is_empty() => TypeExpr::Primitive(tag.to_string()),
            _ => TypeExpr::Any,
        }
    }
}

impl From<PlaceholderKind> for TypeExpr {
    fn from(kind: PlaceholderKind) -> Self {
        match kind {
            PlaceholderKind::ByteStream => TypeExpr::Object,
            PlaceholderKind::File => TypeExpr::Any,
        }
    }
}

/// One interface member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Property name as it appears in the document
    pub name: String,

    /// Whether the property is listed as required
    pub required: bool,

    /// Field type
    pub type_expr: TypeExpr,

    /// Property description
    pub description: Option<String>,
}

/// A synthesized interface, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceModel {
    /// Source type name (definitions key)
    pub type_name: String,

    /// Code identifier of the interface
    pub identifier: String,

    /// File slug of the interface module
    pub slug: String,

    /// Schema description
    pub description: Option<String>,

    /// Members, in property order
    pub fields: Vec<Field>,

    /// Source type names to import, in first-use order
    pub imports: IndexSet<String>,
}

/// Synthesizes interfaces from object schema definitions
#[derive(Debug, Default, Clone, Copy)]
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Synthesize the interface for `type_name`.
    ///
    /// Returns `None` for schemas that are not objects; those produce no file.
    pub fn synthesize(&self, type_name: &str, schema: &Schema) -> Option<InterfaceModel> {
        if !schema.is_object() {
            debug!("Skipping non-object schema {}", type_name);
            return None;
        }

        let mut imports = IndexSet::new();
        let fields = schema
            .properties
            .iter()
            .map(|(name, property)| Field {
                name: name.clone(),
                required: schema.is_property_required(name),
                type_expr: self.property_type(type_name, property, &mut imports),
                description: property.description.clone(),
            })
            .collect();

        Some(InterfaceModel {
            type_name: type_name.to_string(),
            identifier: to_identifier(Some(type_name)),
            slug: to_slug(Some(type_name)),
            description: schema.description.clone(),
            fields,
            imports,
        })
    }

    fn property_type(
        &self,
        type_name: &str,
        property: &Schema,
        imports: &mut IndexSet<String>,
    ) -> TypeExpr {
        match property.kind() {
            SchemaKind::Reference(reference) => self.reference_type(type_name, reference, imports),
            SchemaKind::Array(items) => {
                let item = match items {
                    Some(items) => self.property_type(type_name, items, imports),
                    None => TypeExpr::Any,
                };
                TypeExpr::Array(Box::new(item))
            }
            SchemaKind::Object => TypeExpr::primitive(property.schema_type.as_deref()),
            SchemaKind::Primitive(tag) => TypeExpr::primitive(tag),
        }
    }

    fn reference_type(
        &self,
        type_name: &str,
        reference: &str,
        imports: &mut IndexSet<String>,
    ) -> TypeExpr {
        match resolve_ref(reference) {
            ResolvedRef::Placeholder(kind) => TypeExpr::from(kind),
            ResolvedRef::Named(name) if name == ANY_TYPE => TypeExpr::Any,
            ResolvedRef::Named(name) => {
                if name != type_name {
                    imports.insert(name.clone());
                }
                TypeExpr::Named(name)
            }
        }
    }
}
