//! Common types used throughout alerta-avro
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type; a record is one of these
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Compression Codec
// ============================================================================

/// Block compression applied to the container body
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    /// No compression
    #[default]
    Null,
    /// DEFLATE (RFC 1951)
    Deflate,
    /// Snappy with CRC32 trailer
    Snappy,
}

impl From<CompressionCodec> for apache_avro::Codec {
    fn from(codec: CompressionCodec) -> Self {
        match codec {
            CompressionCodec::Null => apache_avro::Codec::Null,
            CompressionCodec::Deflate => apache_avro::Codec::Deflate,
            CompressionCodec::Snappy => apache_avro::Codec::Snappy,
        }
    }
}

impl std::fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionCodec::Null => write!(f, "null"),
            CompressionCodec::Deflate => write!(f, "deflate"),
            CompressionCodec::Snappy => write!(f, "snappy"),
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
        }
    }
}
