//! Conversions to and from `serde_json::Value`.
//!
//! Numbers pass through `f64`. Whole numbers within ±2^53 become integer
//! numbers on the serde_json side; non-finite numbers become `null`.

use serde_json::{Number, Value as SerdeValue};

use crate::serialize::MAX_SAFE_INTEGER;
use crate::value::Value;

impl From<SerdeValue> for Value {
    fn from(value: SerdeValue) -> Self {
        match value {
            SerdeValue::Null => Value::Null,
            SerdeValue::Bool(b) => Value::Bool(b),
            SerdeValue::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            SerdeValue::String(s) => Value::String(s),
            SerdeValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            SerdeValue::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for SerdeValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SerdeValue::Null,
            Value::Bool(b) => SerdeValue::Bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                SerdeValue::Number(Number::from(*n as i64))
            }
            Value::Number(n) => Number::from_f64(*n).map_or(SerdeValue::Null, SerdeValue::Number),
            Value::String(s) => SerdeValue::String(s.clone()),
            Value::Array(items) => SerdeValue::Array(items.iter().map(SerdeValue::from).collect()),
            Value::Object(members) => SerdeValue::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), SerdeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for SerdeValue {
    fn from(value: Value) -> Self {
        SerdeValue::from(&value)
    }
}
