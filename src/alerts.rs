//! Terminal alerts
//!
//! Typed form of the `com.hubdatos.analytics.AlertaTerminal` record and the
//! sample data set written by default.

use crate::builtin;
use crate::error::{Error, Result};
use crate::loader::load_schema_from_str;
use crate::schema::RecordSchema;
use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "alertas.avro";

/// One terminal alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Terminal identifier (e.g. `TERM-001`)
    pub codigo_terminal: String,
    /// Alert kind (e.g. `PAPEL_BAJO`)
    pub tipo_alerta: String,
    /// Event time, RFC 3339
    pub fecha_evento: String,
    /// Free-form detail
    pub detalle: String,
}

impl Alert {
    /// Create an alert stamped with `at`
    pub fn new(
        codigo_terminal: impl Into<String>,
        tipo_alerta: impl Into<String>,
        at: DateTime<Utc>,
        detalle: impl Into<String>,
    ) -> Self {
        Self {
            codigo_terminal: codigo_terminal.into(),
            tipo_alerta: tipo_alerta.into(),
            fecha_evento: format_event_time(at),
            detalle: detalle.into(),
        }
    }

    /// Convert to an untyped record
    pub fn to_record(&self) -> Result<JsonObject> {
        match serde_json::to_value(self)? {
            JsonValue::Object(obj) => Ok(obj),
            _ => Err(Error::output("alert did not serialize to an object")),
        }
    }

    /// Convert from an untyped record
    pub fn from_record(record: &JsonObject) -> Result<Self> {
        Ok(serde_json::from_value(JsonValue::Object(record.clone()))?)
    }
}

/// The built-in alert schema
pub fn alert_schema() -> Result<RecordSchema> {
    let text = builtin::get_builtin(builtin::ALERTA_TERMINAL).ok_or_else(|| {
        Error::SchemaNotFound {
            name: builtin::ALERTA_TERMINAL.to_string(),
            available: builtin::list_builtin().join(", "),
        }
    })?;
    load_schema_from_str(text)
}

/// Format an event time as RFC 3339 in UTC with microseconds
///
/// e.g. `2026-10-16T09:38:00.123456Z`
pub fn format_event_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// The sample alerts, all stamped with `now`
pub fn sample_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert::new("TERM-001", "PAPEL_BAJO", now, "Consumo > 50%"),
        Alert::new("TERM-999", "FRAUDE_POSIBLE", now, "Tx en comercio Inactivo"),
    ]
}

/// Convert alerts to untyped records
pub fn alerts_to_records(alerts: &[Alert]) -> Result<Vec<JsonObject>> {
    alerts.iter().map(Alert::to_record).collect()
}
