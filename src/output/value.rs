//! JSON <-> Avro value conversion
//!
//! `json_to_avro` is where records are checked against the schema: every
//! declared field present, no undeclared fields, every value of the declared
//! type. Fields are emitted in schema order.

use crate::error::{Error, Result};
use crate::loader::json_kind;
use crate::schema::{FieldDef, FieldType, RecordSchema};
use crate::types::{JsonObject, JsonValue};
use apache_avro::types::Value;

/// Convert a JSON record into an Avro record value, validating it
///
/// `index` is the position of the record in its input sequence and is
/// reported in any [`Error::SchemaViolation`].
pub fn json_to_avro(schema: &RecordSchema, record: &JsonObject, index: usize) -> Result<Value> {
    if let Some(extra) = record.keys().find(|key| !schema.has_field(key)) {
        return Err(Error::schema_violation(
            index,
            format!("undeclared field '{extra}'"),
        ));
    }

    let mut fields = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let value = record.get(&field.name).ok_or_else(|| {
            Error::schema_violation(index, format!("missing required field '{}'", field.name))
        })?;
        fields.push((field.name.clone(), convert_field(field, value, index)?));
    }

    Ok(Value::Record(fields))
}

/// Convert a batch of records, stopping at the first violation
pub fn records_to_avro(schema: &RecordSchema, records: &[JsonObject]) -> Result<Vec<Value>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| json_to_avro(schema, record, index))
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn convert_field(field: &FieldDef, value: &JsonValue, index: usize) -> Result<Value> {
    let mismatch = || {
        Error::schema_violation(
            index,
            format!(
                "field '{}' expects {}, got {}",
                field.name,
                field.field_type,
                json_kind(value)
            ),
        )
    };

    match field.field_type {
        FieldType::Null => value.is_null().then_some(Value::Null).ok_or_else(mismatch),

        FieldType::Boolean => value.as_bool().map(Value::Boolean).ok_or_else(mismatch),

        FieldType::Int => value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Value::Int)
            .ok_or_else(mismatch),

        FieldType::Long => value.as_i64().map(Value::Long).ok_or_else(mismatch),

        FieldType::Float => {
            let n = value.as_f64().ok_or_else(mismatch)? as f32;
            if !n.is_finite() {
                return Err(Error::schema_violation(
                    index,
                    format!(
                        "field '{}' value {value} is out of range for float",
                        field.name
                    ),
                ));
            }
            Ok(Value::Float(n))
        }

        FieldType::Double => value.as_f64().map(Value::Double).ok_or_else(mismatch),

        FieldType::Bytes => {
            let items = value.as_array().ok_or_else(mismatch)?;
            items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(Value::Bytes)
                .ok_or_else(mismatch)
        }

        FieldType::String => value
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(mismatch),
    }
}

/// Convert a decoded Avro value to JSON
pub fn avro_to_json(value: &Value) -> Result<JsonValue> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Boolean(b) => Ok(JsonValue::Bool(*b)),
        Value::Int(n) => Ok(JsonValue::Number((*n).into())),
        Value::Long(n) => Ok(JsonValue::Number((*n).into())),
        // Shortest decimal form of the f32, so 0.1 reads back as 0.1
        Value::Float(n) => Ok(n
            .to_string()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map_or(JsonValue::Null, JsonValue::Number)),
        Value::Double(n) => {
            Ok(serde_json::Number::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number))
        }
        Value::Bytes(bytes) | Value::Fixed(_, bytes) => Ok(JsonValue::Array(
            bytes.iter().map(|b| JsonValue::Number((*b).into())).collect(),
        )),
        Value::String(s) | Value::Enum(_, s) => Ok(JsonValue::String(s.clone())),
        Value::Union(_, inner) => avro_to_json(inner),
        Value::Array(items) => items
            .iter()
            .map(avro_to_json)
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array),
        Value::Map(map) => {
            let mut obj = JsonObject::new();
            for (key, item) in map {
                obj.insert(key.clone(), avro_to_json(item)?);
            }
            Ok(JsonValue::Object(obj))
        }
        Value::Record(fields) => record_to_json(fields).map(JsonValue::Object),
        other => Err(Error::output(format!(
            "unsupported Avro value in container: {other:?}"
        ))),
    }
}

/// Convert the fields of a decoded record to a JSON object
pub fn record_to_json(fields: &[(String, Value)]) -> Result<JsonObject> {
    let mut obj = JsonObject::new();
    for (name, value) in fields {
        obj.insert(name.clone(), avro_to_json(value)?);
    }
    Ok(obj)
}
