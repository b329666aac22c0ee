//! Avro container writer
//!
//! Writes records into an Avro object container file. Output goes to a
//! temporary file next to the destination and is renamed into place on
//! [`AvroWriter::close`], so a failed write never leaves a truncated
//! container behind and never clobbers an existing file.

use crate::error::{Error, Result};
use crate::output::value::{json_to_avro, records_to_avro};
use crate::schema::{describe_fields, RecordSchema};
use crate::types::{CompressionCodec, JsonObject};
use apache_avro::types::Value;
use apache_avro::Writer;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Configuration for the Avro writer
#[derive(Debug, Clone)]
pub struct AvroWriterConfig {
    codec: CompressionCodec,
    metadata: BTreeMap<String, String>,
    sync_on_close: bool,
}

impl AvroWriterConfig {
    /// Get the compression codec
    #[must_use]
    pub fn codec(&self) -> CompressionCodec {
        self.codec
    }

    /// Get user metadata entries
    #[must_use]
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Get whether the file is fsynced before it is published
    #[must_use]
    pub fn is_sync_on_close(&self) -> bool {
        self.sync_on_close
    }
}

impl Default for AvroWriterConfig {
    fn default() -> Self {
        Self {
            codec: CompressionCodec::Null,
            metadata: BTreeMap::new(),
            sync_on_close: true,
        }
    }
}

impl AvroWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compression codec
    #[must_use]
    pub fn with_codec(mut self, codec: CompressionCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Add a user metadata entry to the container header
    ///
    /// Keys in the reserved `avro.` namespace are rejected when the writer
    /// is opened.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Enable or disable fsync before publishing the file
    #[must_use]
    pub fn with_sync_on_close(mut self, enabled: bool) -> Self {
        self.sync_on_close = enabled;
        self
    }

    /// Use DEFLATE compression
    #[must_use]
    pub fn deflate(mut self) -> Self {
        self.codec = CompressionCodec::Deflate;
        self
    }

    /// Use Snappy compression
    #[must_use]
    pub fn snappy(mut self) -> Self {
        self.codec = CompressionCodec::Snappy;
        self
    }
}

/// Avro container file writer
///
/// Holds the temporary output file exclusively until [`close`](Self::close).
/// Dropping the writer without closing it discards the temporary file.
pub struct AvroWriter<'a> {
    /// Container writer over the temporary file
    writer: Writer<'a, NamedTempFile>,
    /// Schema every record is checked against
    schema: &'a RecordSchema,
    /// Final path of the container
    destination: PathBuf,
    /// Whether to fsync before rename
    sync_on_close: bool,
    /// Number of records written
    records_written: usize,
}

impl<'a> AvroWriter<'a> {
    /// Create a new Avro writer for `path`
    pub fn new(
        path: impl AsRef<Path>,
        schema: &'a RecordSchema,
        config: &AvroWriterConfig,
    ) -> Result<Self> {
        let destination = path.as_ref().to_path_buf();
        let temp = create_temp_file(&destination)?;
        debug!(
            "Writing {} to temporary file {}",
            destination.display(),
            temp.path().display()
        );

        let mut writer = Writer::with_codec(schema.avro(), temp, config.codec.into());
        for (key, value) in &config.metadata {
            writer
                .add_user_metadata(key.clone(), value.as_bytes())
                .map_err(|e| Error::config(format!("Invalid metadata key '{key}': {e}")))?;
        }

        Ok(Self {
            writer,
            schema,
            destination,
            sync_on_close: config.sync_on_close,
            records_written: 0,
        })
    }

    /// Validate and write a single record
    pub fn write(&mut self, record: &JsonObject) -> Result<()> {
        let value = json_to_avro(self.schema, record, self.records_written)?;
        self.append(value)
    }

    /// Validate and write a sequence of records
    pub fn write_all<'r>(
        &mut self,
        records: impl IntoIterator<Item = &'r JsonObject>,
    ) -> Result<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Append an already validated value
    fn append(&mut self, value: Value) -> Result<()> {
        self.writer.append(value)?;
        self.records_written += 1;
        Ok(())
    }

    /// Get the number of records written so far
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Get the destination path
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Flush the container and atomically move it into place
    ///
    /// The header is written even when no records were appended.
    pub fn close(self) -> Result<usize> {
        let rows = self.records_written;
        let temp = self.writer.into_inner().map_err(|e| match e {
            apache_avro::Error::WriteBytes(source) | apache_avro::Error::WriteMarker(source) => {
                Error::io_failure(&self.destination, source)
            }
            other => Error::Avro(other),
        })?;

        if self.sync_on_close {
            temp.as_file()
                .sync_all()
                .map_err(|e| Error::io_failure(&self.destination, e))?;
        }

        temp.persist(&self.destination)
            .map_err(|e| Error::io_failure(&self.destination, e.error))?;

        info!(
            "Wrote {} record(s) of {} to {}",
            rows,
            self.schema.full_name(),
            self.destination.display()
        );
        Ok(rows)
    }
}

/// Create the temporary output file in the destination's directory
fn create_temp_file(destination: &Path) -> Result<NamedTempFile> {
    let file_name = destination
        .file_name()
        .ok_or_else(|| Error::config(format!("Invalid output path: {}", destination.display())))?
        .to_string_lossy()
        .into_owned();

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let temp = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(|e| Error::io_failure(destination, e))?;

    copy_permissions(destination, &temp)?;
    Ok(temp)
}

/// Give the temporary file the permissions the published file should have
fn copy_permissions(destination: &Path, temp: &NamedTempFile) -> Result<()> {
    if let Ok(meta) = fs::metadata(destination) {
        return fs::set_permissions(temp.path(), meta.permissions())
            .map_err(|e| Error::io_failure(temp.path(), e));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o644))
            .map_err(|e| Error::io_failure(temp.path(), e))?;
    }

    Ok(())
}

/// Write a sequence of records to an Avro container file
///
/// Every record is validated before the output file is touched, so a
/// schema violation leaves the filesystem unchanged. Returns the number of
/// records written; an empty sequence produces a header-only container.
pub fn write_records_to_avro(
    path: impl AsRef<Path>,
    schema: &RecordSchema,
    records: &[JsonObject],
    config: Option<&AvroWriterConfig>,
) -> Result<usize> {
    let default_config = AvroWriterConfig::default();
    let config = config.unwrap_or(&default_config);

    let values = records_to_avro(schema, records)?;
    debug!(
        "Validated {} record(s) against {} [{}]",
        values.len(),
        schema.full_name(),
        describe_fields(schema)
    );

    let mut writer = AvroWriter::new(path, schema, config)?;
    for value in values {
        writer.append(value)?;
    }
    writer.close()
}
