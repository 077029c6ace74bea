use serde::Serialize;
use serde_json::Value;

/// True when any string in the serialized form of `model` has a byte above 127.
///
/// Only values are inspected, object keys are fixed field names.
pub fn has_non_ascii<T: Serialize>(model: &T) -> Result<bool, serde_json::Error> {
    Ok(contains_non_ascii(&serde_json::to_value(model)?))
}

fn contains_non_ascii(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_ascii(),
        Value::Array(items) => items.iter().any(contains_non_ascii),
        Value::Object(map) => map.values().any(contains_non_ascii),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}
