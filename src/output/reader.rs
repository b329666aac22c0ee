//! Avro container reader
//!
//! Decodes containers using only the schema embedded in their header.

use crate::error::{Error, Result};
use crate::output::value::record_to_json;
use crate::schema::RecordSchema;
use crate::types::JsonObject;
use apache_avro::types::Value;
use apache_avro::Reader;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// A decoded container
#[derive(Debug, Clone)]
pub struct AvroContainer {
    /// Writer schema from the header
    pub schema: RecordSchema,
    /// Records in file order
    pub records: Vec<JsonObject>,
    /// User metadata from the header (lossy UTF-8)
    pub metadata: BTreeMap<String, String>,
}

impl AvroContainer {
    /// Number of records in the container
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the container holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read an Avro container file
pub fn read_avro_file(path: impl AsRef<Path>) -> Result<AvroContainer> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io_failure(path, e))?;
    let container = read_avro(BufReader::new(file))?;
    debug!(
        "Read {} record(s) of {} from {}",
        container.len(),
        container.schema.full_name(),
        path.display()
    );
    Ok(container)
}

/// Read an Avro container from any byte source
pub fn read_avro<R: Read>(input: R) -> Result<AvroContainer> {
    let reader = Reader::new(input)?;
    let schema = RecordSchema::from_avro(reader.writer_schema())?;
    let metadata = reader
        .user_metadata()
        .iter()
        .map(|(k, v)| (k.clone(), String::from_utf8_lossy(v).into_owned()))
        .collect();

    let mut records = Vec::new();
    for value in reader {
        match value? {
            Value::Record(fields) => records.push(record_to_json(&fields)?),
            other => {
                return Err(Error::output(format!(
                    "expected a record in container, got {other:?}"
                )))
            }
        }
    }

    Ok(AvroContainer {
        schema,
        records,
        metadata,
    })
}
