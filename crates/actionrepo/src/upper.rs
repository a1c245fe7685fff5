use crate::prelude::{println, *};
use actionrepo_core::transform::uppercase_transform;
use actionrepo_core::value::{parse_value, Value};

#[derive(Debug, clap::Parser)]
#[command(name = "upper")]
#[command(about = "Upper-case a value or a list of values")]
pub struct App {
    /// Values to transform; each token is parsed as JSON when possible
    #[arg(value_name = "VALUES", required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let input = collect_input(&app.values);

    if global.verbose {
        println!("Input: {}", input);
    }

    let output = uppercase_transform(input);

    if app.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
    } else {
        println!("{}", format_value_text(&output));
    }

    Ok(())
}

/// A single token is transformed on its own; several tokens form a sequence.
fn collect_input(tokens: &[String]) -> Value {
    match tokens {
        [single] => parse_value(single),
        many => Value::Array(many.iter().map(|t| parse_value(t)).collect()),
    }
}

/// Strings print bare, everything else as compact JSON, one item per line for sequences.
fn format_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_collect_input_single_token() {
        assert_eq!(collect_input(&tokens(&["hello world"])), json!("hello world"));
        assert_eq!(collect_input(&tokens(&["123"])), json!(123));
    }

    #[test]
    fn test_collect_input_many_tokens() {
        assert_eq!(
            collect_input(&tokens(&["hello", "world", "123"])),
            json!(["hello", "world", 123])
        );
    }

    #[test]
    fn test_transform_round_trip_through_cli_input() {
        let output = uppercase_transform(collect_input(&tokens(&["hello", "world", "123"])));
        assert_eq!(output, json!(["HELLO", "WORLD", 123]));
        assert_eq!(format_value_text(&output), "HELLO\nWORLD\n123");
    }

    #[test]
    fn test_format_value_text_other() {
        assert_eq!(format_value_text(&json!({"key": "value"})), r#"{"key":"value"}"#);
        assert_eq!(format_value_text(&Value::Null), "null");
    }
}
