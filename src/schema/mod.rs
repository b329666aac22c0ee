//! Schema module
//!
//! Declares the shape every record in a container must satisfy.
//!
//! # Overview
//!
//! - `SchemaDefinition` - serde model of an Avro record schema (`.avsc`)
//! - `FieldDef` / `FieldType` - ordered primitive field declarations
//! - `RecordSchema` - validated, immutable schema compiled for the writer

mod record;
mod types;

pub(crate) use record::describe_fields;
pub use record::{is_valid_name, RecordSchema};
pub use types::{FieldDef, FieldType, SchemaDefinition};

#[cfg(test)]
mod tests;
