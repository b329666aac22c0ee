//! # alerta-avro
//!
//! Writes terminal alert records to self-describing Avro object container
//! files, and reads them back.
//!
//! ## Features
//!
//! - **Fixed Schemas**: Record schemas are validated once and immutable afterwards
//! - **Strict Records**: Missing, undeclared or mistyped fields are rejected before any output
//! - **Self-Describing Output**: The schema travels in the container header
//! - **Atomic Publish**: Output is written to a temporary file and renamed into place
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alerta_avro::alerts::{alert_schema, alerts_to_records, sample_alerts};
//! use alerta_avro::output::{read_avro_file, write_records_to_avro};
//!
//! fn main() -> alerta_avro::Result<()> {
//!     let schema = alert_schema()?;
//!     let records = alerts_to_records(&sample_alerts(chrono::Utc::now()))?;
//!
//!     write_records_to_avro("alertas.avro", &schema, &records, None)?;
//!
//!     let container = read_avro_file("alertas.avro")?;
//!     assert_eq!(container.records, records);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────────────┐
//! │    loader    │──▶│    schema    │──▶│            output            │
//! │ .avsc / JSON │   │ RecordSchema │   │ validate → write → rename    │
//! │ YAML / JSONL │   │ (immutable)  │   │ read (embedded schema)       │
//! └──────────────┘   └──────────────┘   └──────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Record schema model
pub mod schema;

/// Built-in schema definitions
pub mod builtin;

/// Schema and record file loading
pub mod loader;

/// Avro container writing and reading
pub mod output;

/// Terminal alert records
pub mod alerts;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use alerts::{alert_schema, sample_alerts, Alert};
pub use output::{read_avro_file, write_records_to_avro, AvroWriter, AvroWriterConfig};
pub use schema::{FieldDef, FieldType, RecordSchema, SchemaDefinition};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
