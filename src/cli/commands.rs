//! CLI commands and argument parsing

use crate::alerts::DEFAULT_OUTPUT;
use crate::types::{CompressionCodec, LogLevel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal alert Avro writer
#[derive(Parser, Debug)]
#[command(name = "alerta-avro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (default: write the sample alerts to alertas.avro)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log level implied by the flags
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write records to an Avro container file
    Write {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Schema: built-in name or path to an .avsc/.json/.yaml file
        #[arg(short, long, default_value = "alerta_terminal")]
        schema: String,

        /// Records file (.json, .jsonl, .yaml); omit to write the sample alerts
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Block compression codec
        #[arg(long, default_value = "null")]
        codec: CompressionCodec,

        /// Header metadata entry (KEY=VALUE, repeatable)
        #[arg(long = "metadata", value_parser = parse_key_value)]
        metadata: Vec<(String, String)>,
    },

    /// Print the records of an Avro container file
    Read {
        /// Container file
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the schema embedded in a container (or the built-in alert schema)
    Schema {
        /// Container file
        input: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}

/// Parse a `KEY=VALUE` pair
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
