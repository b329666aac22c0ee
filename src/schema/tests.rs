//! Schema tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn alert_definition() -> SchemaDefinition {
    SchemaDefinition::new("AlertaTerminal")
        .with_namespace("com.hubdatos.analytics")
        .with_doc("Alertas de Terminales")
        .with_field(FieldDef::string("codigo_terminal"))
        .with_field(FieldDef::string("tipo_alerta"))
        .with_field(FieldDef::string("fecha_evento"))
        .with_field(FieldDef::string("detalle"))
}

// ============================================================================
// Definition Tests
// ============================================================================

#[test]
fn test_definition_serializes_as_avsc() {
    let def = SchemaDefinition::new("Ping")
        .with_namespace("com.example")
        .with_field(FieldDef::string("host"))
        .with_field(FieldDef::new("latency_ms", FieldType::Long));

    let value = serde_json::to_value(&def).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "record",
            "name": "Ping",
            "namespace": "com.example",
            "fields": [
                {"name": "host", "type": "string"},
                {"name": "latency_ms", "type": "long"}
            ]
        })
    );
}

#[test]
fn test_definition_deserialize_defaults_kind() {
    let def: SchemaDefinition =
        serde_json::from_value(json!({"name": "Ping", "fields": []})).unwrap();
    assert_eq!(def.kind, "record");
    assert!(def.namespace.is_none());
    assert!(def.fields.is_empty());
}

#[test]
fn test_full_name() {
    assert_eq!(
        alert_definition().full_name(),
        "com.hubdatos.analytics.AlertaTerminal"
    );
    assert_eq!(SchemaDefinition::new("Bare").full_name(), "Bare");
}

#[test_case(FieldType::Null, "null")]
#[test_case(FieldType::Boolean, "boolean")]
#[test_case(FieldType::Int, "int")]
#[test_case(FieldType::Long, "long")]
#[test_case(FieldType::Float, "float")]
#[test_case(FieldType::Double, "double")]
#[test_case(FieldType::Bytes, "bytes")]
#[test_case(FieldType::String, "string")]
fn test_field_type_names(field_type: FieldType, name: &str) {
    assert_eq!(field_type.to_string(), name);
    assert_eq!(serde_json::to_value(field_type).unwrap(), json!(name));
}

// ============================================================================
// RecordSchema Tests
// ============================================================================

#[test]
fn test_record_schema_compiles() {
    let schema = RecordSchema::new(alert_definition()).unwrap();

    assert_eq!(schema.name(), "AlertaTerminal");
    assert_eq!(schema.namespace(), Some("com.hubdatos.analytics"));
    assert_eq!(schema.doc(), Some("Alertas de Terminales"));
    assert_eq!(schema.fields().len(), 4);
    assert!(schema.has_field("detalle"));
    assert!(!schema.has_field("monto"));
    assert!(matches!(schema.avro(), apache_avro::Schema::Record(_)));
}

#[test]
fn test_record_schema_preserves_field_order() {
    let schema = RecordSchema::new(alert_definition()).unwrap();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["codigo_terminal", "tipo_alerta", "fecha_evento", "detalle"]
    );
}

#[test]
fn test_record_schema_duplicate_field() {
    let def = SchemaDefinition::new("Dup")
        .with_field(FieldDef::string("a"))
        .with_field(FieldDef::new("a", FieldType::Long));

    let err = RecordSchema::new(def).unwrap_err();
    assert!(err.to_string().contains("duplicate field 'a'"));
}

#[test_case("1abc"; "leading digit")]
#[test_case("with-dash"; "dash")]
#[test_case(""; "empty")]
fn test_record_schema_invalid_record_name(name: &str) {
    let err = RecordSchema::new(SchemaDefinition::new(name)).unwrap_err();
    assert!(matches!(err, crate::Error::InvalidSchema { .. }));
}

#[test]
fn test_record_schema_invalid_field_name() {
    let def = SchemaDefinition::new("Rec").with_field(FieldDef::string("bad name"));
    assert!(RecordSchema::new(def).is_err());
}

#[test]
fn test_record_schema_invalid_namespace() {
    let def = SchemaDefinition::new("Rec").with_namespace("com..hubdatos");
    assert!(RecordSchema::new(def).is_err());
}

#[test]
fn test_record_schema_rejects_non_record() {
    let mut def = alert_definition();
    def.kind = "enum".to_string();
    let err = RecordSchema::new(def).unwrap_err();
    assert!(err.to_string().contains("expected 'record'"));
}

#[test]
fn test_record_schema_from_avro() {
    let schema = RecordSchema::new(alert_definition()).unwrap();
    let rebuilt = RecordSchema::from_avro(schema.avro()).unwrap();

    assert_eq!(rebuilt.full_name(), schema.full_name());
    assert_eq!(rebuilt.fields().len(), 4);
    for (a, b) in rebuilt.fields().iter().zip(schema.fields()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.field_type, b.field_type);
    }
}

#[test]
fn test_record_schema_from_avro_rejects_primitive() {
    let err = RecordSchema::from_avro(&apache_avro::Schema::String).unwrap_err();
    assert!(matches!(err, crate::Error::InvalidSchema { .. }));
}

#[test]
fn test_record_schema_try_from() {
    let schema: RecordSchema = alert_definition().try_into().unwrap();
    assert_eq!(schema.definition(), &alert_definition());
}

#[test]
fn test_to_json_pretty_round_trips() {
    let schema = RecordSchema::new(alert_definition()).unwrap();
    let text = schema.to_json_pretty().unwrap();
    let parsed: SchemaDefinition = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, alert_definition());
}

#[test]
fn test_describe_fields() {
    let def = SchemaDefinition::new("Rec")
        .with_field(FieldDef::string("a"))
        .with_field(FieldDef::new("b", FieldType::Int));
    let schema = RecordSchema::new(def).unwrap();
    assert_eq!(describe_fields(&schema), "a:string, b:int");
}

#[test]
fn test_is_valid_name() {
    assert!(is_valid_name("codigo_terminal"));
    assert!(is_valid_name("_private"));
    assert!(!is_valid_name("9lives"));
    assert!(!is_valid_name("a.b"));
}
