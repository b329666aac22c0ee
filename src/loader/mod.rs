//! Loader module
//!
//! Reads schemas and record sets from disk.
//!
//! # Overview
//!
//! - `load_schema` - built-in schema by name, or `.avsc`/JSON/YAML file
//! - `load_records` - JSON array, JSON lines or YAML record files

mod parser;
mod types;

pub(crate) use parser::json_kind;
pub use parser::{load_records, load_records_from_str, load_schema, load_schema_from_str};
pub use types::RecordFormat;
