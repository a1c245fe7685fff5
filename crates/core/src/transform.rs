//! Upper-case transformation over dynamic values.

use serde_json::Value;

/// Upper-case text, element-wise for sequences.
///
/// - A string is upper-cased.
/// - An array keeps its order and length; string elements are upper-cased and
///   every other element (including nested arrays) passes through unchanged.
/// - Anything else is returned as-is.
pub fn uppercase_transform(data: Value) -> Value {
    match data {
        Value::String(s) => Value::String(s.to_uppercase()),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Value::String(s.to_uppercase()),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}
