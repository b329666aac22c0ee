//! Schema types
//!
//! Serde model of an Avro `record` schema restricted to primitive fields.

use serde::{Deserialize, Serialize};

/// Avro primitive type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Null => write!(f, "null"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Int => write!(f, "int"),
            FieldType::Long => write!(f, "long"),
            FieldType::Float => write!(f, "float"),
            FieldType::Double => write!(f, "double"),
            FieldType::Bytes => write!(f, "bytes"),
            FieldType::String => write!(f, "string"),
        }
    }
}

/// A single field declaration
///
/// Field-level `doc` attributes in `.avsc` input are ignored: the container
/// header does not carry them, so they could not be read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name
    pub name: String,

    /// Field type
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDef {
    /// Create a new field declaration
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    /// Create a `string` field
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }
}

/// Declarative record schema, as written in `.avsc` files
///
/// This is plain data and may be invalid; build a
/// [`RecordSchema`](super::RecordSchema) from it to validate and freeze it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Schema kind; only `record` is supported
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,

    /// Record name
    pub name: String,

    /// Namespace (optional, dot separated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Documentation (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Ordered field declarations
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

fn default_kind() -> String {
    "record".to_string()
}

impl SchemaDefinition {
    /// Create a new record definition with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: default_kind(),
            name: name.into(),
            namespace: None,
            doc: None,
            fields: Vec::new(),
        }
    }

    /// Set namespace
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set documentation
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Append a field
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Full name (`namespace.name`, or `name` without namespace)
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        }
    }
}
