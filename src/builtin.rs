//! Built-in schema definitions embedded in the binary
//!
//! Lets users write `--schema alerta_terminal` instead of pointing at an
//! `.avsc` file.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in `.avsc` definitions, keyed by name and alias
pub static BUILTIN_SCHEMAS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            "alerta_terminal",
            include_str!("../schemas/alerta_terminal.avsc"),
        );
        m.insert(
            "alerta-terminal",
            include_str!("../schemas/alerta_terminal.avsc"),
        );

        m
    });

/// Name of the terminal alert schema
pub const ALERTA_TERMINAL: &str = "alerta_terminal";

/// Get a built-in schema by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_SCHEMAS.get(name).copied()
}

/// Check if a name refers to a built-in schema
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_SCHEMAS.contains_key(name)
}

/// List built-in schema names (primary names only)
pub fn list_builtin() -> Vec<&'static str> {
    vec![ALERTA_TERMINAL]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schemas_exist() {
        assert!(get_builtin("alerta_terminal").is_some());
        assert!(is_builtin("alerta_terminal"));
    }

    #[test]
    fn test_aliases_work() {
        assert_eq!(get_builtin("alerta_terminal"), get_builtin("alerta-terminal"));
    }

    #[test]
    fn test_unknown_schema() {
        assert!(get_builtin("unknown").is_none());
        assert!(!is_builtin("unknown"));
    }

    #[test]
    fn test_list_builtin() {
        for name in list_builtin() {
            assert!(is_builtin(name));
        }
    }

    #[test]
    fn test_builtin_is_json() {
        let text = get_builtin(ALERTA_TERMINAL).unwrap();
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["name"], "AlertaTerminal");
    }
}
