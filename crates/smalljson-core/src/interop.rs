//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Going from serde_json is infallible: numbers keep serde_json's own rendering.
//! Going to serde_json re-reads each number literal through `serde_json::Number`,
//! which can fail (for example when a literal overflows `f64`).

use crate::containers::{Array, Object};
use crate::error::{JsonError, Result};
use crate::types::{Number, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(Number::from_scanned(n.to_string())),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<Array>())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.as_str().parse()?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => serde_json::Value::Array(
                arr.iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(obj) => {
                let mut map = serde_json::Map::new();
                for (key, item) in obj {
                    map.insert(key.clone(), serde_json::Value::try_from(item)?);
                }
                serde_json::Value::Object(map)
            }
        })
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self> {
        serde_json::Value::try_from(&value)
    }
}
