//! Parsers for schema and record files
//!
//! Schemas are accepted by built-in name (e.g. `alerta_terminal`) or by path
//! to an `.avsc`/`.json`/`.yaml` file. Records come from JSON, JSON lines or
//! YAML files.

use crate::builtin;
use crate::error::{Error, Result};
use crate::loader::types::RecordFormat;
use crate::schema::{RecordSchema, SchemaDefinition};
use crate::types::{JsonObject, JsonValue};
use std::fs;
use std::path::Path;

/// Load a schema from a built-in name or a file path
///
/// # Examples
///
/// ```ignore
/// // Built-in schema by name
/// let schema = load_schema("alerta_terminal")?;
///
/// // Custom schema from file
/// let schema = load_schema("./schemas/ping.avsc")?;
/// ```
pub fn load_schema(path: impl AsRef<Path>) -> Result<RecordSchema> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.contains('/') && !path_str.contains('\\') && !path_str.contains('.') {
        if let Some(text) = builtin::get_builtin(&path_str) {
            return load_schema_from_str(text);
        }
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::SchemaNotFound {
                name: path.display().to_string(),
                available: builtin::list_builtin().join(", "),
            }
        } else {
            Error::io_failure(path, e)
        }
    })?;
    load_schema_from_str(&content)
}

/// Load a schema from JSON or YAML text
pub fn load_schema_from_str(text: &str) -> Result<RecordSchema> {
    // JSON is a subset of YAML, so one parser covers both
    let def: SchemaDefinition = serde_yaml::from_str(text)
        .map_err(|e| Error::invalid_schema(format!("failed to parse schema: {e}")))?;
    RecordSchema::new(def)
}

/// Load records from a file, picking the format from its extension
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<JsonObject>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io_failure(path, e))?;
    load_records_from_str(&content, RecordFormat::from_path(path))
}

/// Load records from text in the given format
pub fn load_records_from_str(text: &str, format: RecordFormat) -> Result<Vec<JsonObject>> {
    let values: Vec<JsonValue> = match format {
        RecordFormat::Json => {
            let value: JsonValue = serde_json::from_str(text)?;
            match value {
                JsonValue::Array(items) => items,
                JsonValue::Object(_) => vec![value],
                other => {
                    return Err(Error::config(format!(
                        "expected a JSON array of records, got {}",
                        json_kind(&other)
                    )))
                }
            }
        }
        RecordFormat::JsonLines => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str::<JsonValue>)
            .collect::<std::result::Result<_, _>>()?,
        RecordFormat::Yaml => serde_yaml::from_str(text)?,
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            JsonValue::Object(obj) => Ok(obj),
            other => Err(Error::schema_violation(
                index,
                format!("expected an object, got {}", json_kind(&other)),
            )),
        })
        .collect()
}

/// Human-readable JSON type name
pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "number",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
