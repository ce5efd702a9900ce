//! Loosely-typed configuration values
//!
//! Numeric condition fields arrive from the editing layer as whatever the
//! form produced: a JSON number, a numeric string, an empty string or
//! something else entirely. `Value` accepts all of them so that one bad
//! entry never fails deserialization of a whole queue configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Configuration value
///
/// Operands only ever use `Null`, `Number` and `String`, and `Bool` is read
/// only for a condition's flags. `Array` and `Object` exist solely so that
/// junk input still deserializes; `Display` renders them for validation
/// messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64, handles both int and float)
    Number(f64),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object (key-value map)
    Object(HashMap<String, Value>),
}

impl Value {
    /// Interpret this value as a finite number.
    ///
    /// Numbers must be finite. Strings are trimmed and parsed; a blank
    /// string counts as absent rather than zero. Everything else is `None`.
    pub fn as_finite_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Short type name used in validation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(items) => write!(f, "[{} items]", items.len()),
            Value::Object(_) => write!(f, "{{...}}"),
        }
    }
}
