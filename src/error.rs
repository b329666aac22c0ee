//! Error types for alerta-avro
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for alerta-avro
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Schema violation in record {record}: {message}")]
    SchemaViolation { record: usize, message: String },

    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },

    #[error("Schema '{name}' not found (built-in schemas: {available})")]
    SchemaNotFound { name: String, available: String },

    // ============================================================================
    // Configuration / Input Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Avro Errors
    // ============================================================================
    #[error("Avro error: {0}")]
    Avro(#[from] apache_avro::Error),

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("I/O failure on '{path}': {source}")]
    IoFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a schema violation error for the record at `record`
    pub fn schema_violation(record: usize, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            record,
            message: message.into(),
        }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create an I/O failure tied to a filesystem path
    pub fn io_failure(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Check if this error is a record/schema mismatch
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Error::SchemaViolation { .. })
    }

    /// Check if this error comes from the output target
    pub fn is_io_failure(&self) -> bool {
        match self {
            Error::IoFailure { .. } | Error::Io(_) => true,
            Error::Avro(e) => matches!(
                e,
                apache_avro::Error::WriteBytes(_) | apache_avro::Error::WriteMarker(_)
            ),
            _ => false,
        }
    }

    /// Process exit code for this error (sysexits.h conventions)
    pub fn exit_code(&self) -> i32 {
        if self.is_schema_violation() {
            65
        } else if self.is_io_failure() {
            74
        } else {
            1
        }
    }
}

/// Result type alias for alerta-avro
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}
