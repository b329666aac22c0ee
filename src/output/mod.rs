//! Output module
//!
//! Handles Avro container writing and reading.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Validating JSON records against a `RecordSchema`
//! - Writing Avro object container files with the schema in the header
//! - Reading containers back using their embedded schema

mod reader;
mod value;
mod writer;

pub use reader::{read_avro, read_avro_file, AvroContainer};
pub use value::{avro_to_json, json_to_avro, record_to_json, records_to_avro};
pub use writer::{write_records_to_avro, AvroWriter, AvroWriterConfig};
