//! Name validation.
//!
//! A name is accepted when, after trimming surrounding whitespace, at least one
//! character remains and every character is an ASCII letter, whitespace, `.`,
//! `-` or `_`. Punctuation-only names like `...` pass.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Characters allowed in a name, anchored to the whole (trimmed) input.
///
/// `\x1C-\x1F` (the ASCII file/group/record/unit separators) count as
/// whitespace alongside `\s`.
pub const NAME_PATTERN: &str = r"^[a-zA-Z\s\x1C-\x1F.\-_]+$";

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"));

/// Reason a name was rejected by [`validate_name`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is empty")]
    Empty,

    #[error("name contains invalid characters: {0:?}")]
    InvalidCharacters(String),
}

/// Returns true when `input` is a non-empty string made of allowed characters.
///
/// Non-string values (numbers, null, objects, arrays) are rejected without error.
pub fn is_valid_name(input: &Value) -> bool {
    match input {
        Value::String(s) => is_valid_name_str(s),
        _ => false,
    }
}

/// String form of [`is_valid_name`].
pub fn is_valid_name_str(input: &str) -> bool {
    validate_name(input).is_ok()
}

/// Unicode whitespace plus the ASCII separator controls U+001C..=U+001F.
fn is_name_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Validate a name, returning the original (untrimmed) input on success.
pub fn validate_name(input: &str) -> Result<&str, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let trimmed = input.trim_matches(is_name_whitespace);
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if NAME_REGEX.is_match(trimmed) {
        Ok(input)
    } else {
        Err(ValidationError::InvalidCharacters(trimmed.to_string()))
    }
}
