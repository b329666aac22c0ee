//! CLI module
//!
//! Command-line interface for writing and inspecting alert containers.
//!
//! # Commands
//!
//! - *(none)* - Write the sample alerts to `alertas.avro`
//! - `write` - Write records to a container
//! - `read` - Print the records of a container
//! - `schema` - Print a container's embedded schema

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
