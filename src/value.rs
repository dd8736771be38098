//! Runtime value model.
//!
//! The engine classifies and validates *runtime* values, and some of the
//! kinds it must name (`undefined`, `callable`, `date`) have no image in
//! `serde_json::Value`. So the crate carries its own value tree and converts
//! at the edges:
//! - `From<serde_json::Value>` is total (every JSON value has a kind here).
//! - `to_json` is lossy the same way `JSON.stringify` is: top-level
//!   `Undefined`/`Callable` vanish, `Undefined` inside arrays becomes `null`,
//!   undefined object properties are skipped, dates render as RFC 3339.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// A runtime value the engine can classify, validate, and infer from.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Carried so the classifier can name the kind; never interpreted.
    Date(DateTime<Utc>),
    /// Opaque marker (the name is purely diagnostic); never invoked.
    Callable(String),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Object property lookup with the absent-equals-undefined convention.
    pub(crate) fn property<'a>(map: &'a IndexMap<String, Value>, key: &str) -> &'a Value {
        map.get(key).unwrap_or(&Value::Undefined)
    }

    /// Convert to JSON, `JSON.stringify`-style. `None` when the value itself
    /// has no JSON image (`Undefined`, `Callable`).
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Undefined | Value::Callable(_) => None,
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Number(n) => Some(
                serde_json::Number::from_f64(*n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            ),
            Value::String(s) => Some(serde_json::Value::String(s.clone())),
            Value::Date(d) => Some(serde_json::Value::String(d.to_rfc3339())),
            Value::Array(xs) => Some(serde_json::Value::Array(
                xs.iter()
                    .map(|x| x.to_json().unwrap_or(serde_json::Value::Null))
                    .collect(),
            )),
            Value::Object(map) => {
                let mut out = serde_json::Map::new();
                for (k, v) in map {
                    if let Some(j) = v.to_json() {
                        out.insert(k.clone(), j);
                    }
                }
                Some(serde_json::Value::Object(out))
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(xs) => {
                Value::Array(xs.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        Value::from(v.clone())
    }
}

// ------------------------------- Tests ------------------------------------ //
