//! Wrapping of decoded `serde_json` documents.

use crate::dynamic::Dyn;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    // Arbitrary-precision literal: keep it as text.
                    n.as_f64()
                        .map_or_else(|| Self::Text(n.to_string()), Self::Float)
                }
            }
            Json::String(s) => Self::Text(s),
            Json::Array(items) => items.into_iter().map(Value::from).collect(),
            Json::Object(fields) => fields
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
        }
    }
}

impl From<serde_json::Value> for Dyn {
    fn from(json: serde_json::Value) -> Self {
        Self::new(json)
    }
}
