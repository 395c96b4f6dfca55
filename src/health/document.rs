//! Tolerant accessors over a parsed status document.
//!
//! A status document comes from outside the process and may have any
//! shape. These helpers never fault: a missing key, or a key looked up on
//! something that is not a mapping, reads as absent.

use serde_json::Value;

use super::HealthError;

/// Value stored under `key`, if `node` is a mapping that has it.
pub fn field_if_mapping<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.as_object()?.get(key)
}

/// String stored under `key`, if present and actually a string.
pub fn string_if_present<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    field_if_mapping(node, key)?.as_str()
}

/// Emptiness as a status document means it: null, `false`, zero and empty
/// containers all count as "nothing here".
pub fn is_empty_value(node: &Value) -> bool {
    match node {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Named children of a mapping node.
///
/// `path` is only used to describe where the document went wrong.
pub fn mapping_entries<'a>(
    node: &'a Value,
    path: &str,
) -> Result<impl Iterator<Item = (&'a str, &'a Value)>, HealthError> {
    let map = node.as_object().ok_or_else(|| HealthError::UnexpectedShape {
        path: path.to_string(),
        expected: "mapping",
    })?;
    Ok(map.iter().map(|(name, child)| (name.as_str(), child)))
}

/// `current` value of a unit's status block (`workload-status`, `juju-status`).
pub fn status_current<'a>(unit: &'a Value, block: &str) -> Option<&'a str> {
    field_if_mapping(unit, block).and_then(|status| string_if_present(status, "current"))
}
