//! Typed access to loosely-typed upstream records
//!
//! Each accessor states its default. JSON `null` and the empty string count
//! as absent everywhere; values decoded from XML arrive as strings and are
//! parsed where a number is expected.

use serde_json::{Map, Value};

/// Borrowed view over one upstream record
///
/// A record that is not a JSON object behaves as if every field were
/// missing.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Record<'a> {
    /// Wrap a decoded record
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields?.get(field).filter(|v| !v.is_null())
    }

    /// Text field, defaulting to `""`
    pub fn text(&self, field: &str) -> String {
        self.linked(field).unwrap_or_default()
    }

    /// Optional linkage field, defaulting to `None`
    ///
    /// Scalars are rendered as text; nested values are treated as absent.
    pub fn linked(&self, field: &str) -> Option<String> {
        let rendered = match self.get(field)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!rendered.is_empty()).then_some(rendered)
    }

    /// Numeric field, defaulting to `None`
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Integer year field, defaulting to `None`
    pub fn year(&self, field: &str) -> Option<i32> {
        match self.get(field)? {
            Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// The `value` list of a payload
///
/// Missing or non-list `value` yields an empty slice.
pub fn records(payload: &Value) -> &[Value] {
    payload
        .get("value")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
