//! Total accessors over loosely-typed upstream JSON.
//!
//! Upstream payloads omit fields freely. Every accessor here returns the
//! [`UNKNOWN`] placeholder instead of failing.

use serde_json::Value;

use crate::UNKNOWN;

/// Follows `path` through nested objects. `None` when any step is missing.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Renders a scalar as display text. Strings are taken verbatim; numbers and
/// booleans use their JSON text. `null` counts as absent.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    lookup(value, path).and_then(as_text)
}

pub fn text_or_unknown(value: &Value, path: &[&str]) -> String {
    text_at(value, path).unwrap_or_else(|| UNKNOWN.to_string())
}
