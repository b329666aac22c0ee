//! Loader types

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout of a record input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordFormat {
    /// A single JSON array of objects
    #[default]
    Json,
    /// One JSON object per line
    JsonLines,
    /// A YAML sequence of mappings
    Yaml,
}

impl RecordFormat {
    /// Pick a format from a file extension, defaulting to JSON
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("jsonl" | "ndjson") => RecordFormat::JsonLines,
            Some("yaml" | "yml") => RecordFormat::Yaml,
            _ => RecordFormat::Json,
        }
    }
}
