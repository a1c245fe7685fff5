//! Dynamic values accepted by the validator and the transform helpers.
//!
//! [`serde_json::Value`] is the closed variant used throughout: `String` is text,
//! `Array` is a sequence and every other variant is opaque.

pub use serde_json::Value;

/// Parse a raw command-line token into a [`Value`].
///
/// Valid JSON is taken as-is (`123`, `null`, `{"k":"v"}`, `["a",1]`); anything
/// else becomes a plain string, so `hello` does not need quoting.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
