//! Validated, immutable record schema
//!
//! A [`RecordSchema`] can only be obtained from a [`SchemaDefinition`] that
//! passed validation and compiled into an `apache_avro::Schema`. It exposes no
//! mutators, so every writer sharing it sees the same shape.

use crate::error::{Error, Result};
use crate::schema::types::{FieldDef, SchemaDefinition};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Avro name grammar: `[A-Za-z_][A-Za-z0-9_]*`
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Validated record schema
#[derive(Debug, Clone)]
pub struct RecordSchema {
    definition: SchemaDefinition,
    avro: apache_avro::Schema,
}

impl RecordSchema {
    /// Validate a definition and compile it
    pub fn new(definition: SchemaDefinition) -> Result<Self> {
        validate_definition(&definition)?;

        let json = serde_json::to_value(&definition)?;
        let avro = apache_avro::Schema::parse(&json)
            .map_err(|e| Error::invalid_schema(format!("'{}': {e}", definition.full_name())))?;

        Ok(Self { definition, avro })
    }

    /// Rebuild a schema from one decoded out of a container header
    pub fn from_avro(schema: &apache_avro::Schema) -> Result<Self> {
        if !matches!(schema, apache_avro::Schema::Record(_)) {
            return Err(Error::invalid_schema(
                "container schema is not a record schema",
            ));
        }

        let json = serde_json::to_value(schema)?;
        let definition: SchemaDefinition = serde_json::from_value(json).map_err(|e| {
            Error::invalid_schema(format!("unsupported container schema: {e}"))
        })?;

        Self::new(definition)
    }

    /// The declarative form
    pub fn definition(&self) -> &SchemaDefinition {
        &self.definition
    }

    /// The compiled Avro schema
    pub fn avro(&self) -> &apache_avro::Schema {
        &self.avro
    }

    /// Record name
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Namespace, if any
    pub fn namespace(&self) -> Option<&str> {
        self.definition.namespace.as_deref()
    }

    /// Documentation, if any
    pub fn doc(&self) -> Option<&str> {
        self.definition.doc.as_deref()
    }

    /// Full name (`namespace.name`)
    pub fn full_name(&self) -> String {
        self.definition.full_name()
    }

    /// Ordered fields
    pub fn fields(&self) -> &[FieldDef] {
        &self.definition.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.definition.fields.iter().find(|f| f.name == name)
    }

    /// Check if a field is declared
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Schema as pretty-printed JSON (the `.avsc` form)
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.definition)?)
    }
}

impl PartialEq for RecordSchema {
    fn eq(&self, other: &Self) -> bool {
        self.definition == other.definition
    }
}

impl Eq for RecordSchema {}

impl TryFrom<SchemaDefinition> for RecordSchema {
    type Error = Error;

    fn try_from(definition: SchemaDefinition) -> Result<Self> {
        Self::new(definition)
    }
}

/// Check names, uniqueness and supported kind
fn validate_definition(def: &SchemaDefinition) -> Result<()> {
    if def.kind != "record" {
        return Err(Error::invalid_schema(format!(
            "unsupported schema type '{}', expected 'record'",
            def.kind
        )));
    }

    if !is_valid_name(&def.name) {
        return Err(Error::invalid_schema(format!(
            "invalid record name '{}'",
            def.name
        )));
    }

    if let Some(ns) = &def.namespace {
        if !ns.is_empty() && !ns.split('.').all(is_valid_name) {
            return Err(Error::invalid_schema(format!("invalid namespace '{ns}'")));
        }
    }

    let mut seen = HashSet::new();
    for field in &def.fields {
        if !is_valid_name(&field.name) {
            return Err(Error::invalid_schema(format!(
                "invalid field name '{}' in record '{}'",
                field.name, def.name
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(Error::invalid_schema(format!(
                "duplicate field '{}' in record '{}'",
                field.name, def.name
            )));
        }
    }

    Ok(())
}

/// Check a single Avro name component
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// `name:type` list of the fields, for logging
pub(crate) fn describe_fields(schema: &RecordSchema) -> String {
    schema
        .fields()
        .iter()
        .map(|f| format!("{}:{}", f.name, f.field_type))
        .collect::<Vec<_>>()
        .join(", ")
}
