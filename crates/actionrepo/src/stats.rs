use crate::prelude::{println, *};
use actionrepo_core::stats::{summarize, summary_map, Numeric, Summary};
use colored::Colorize;

#[derive(Debug, clap::Parser)]
#[command(name = "stats")]
#[command(about = "Summarize a list of numbers")]
pub struct App {
    /// Numbers to summarize; integers stay integers unless any value has a fraction
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true, value_parser = parse_number)]
    numbers: Vec<Number>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// A single command-line number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

fn parse_number(s: &str) -> std::result::Result<Number, String> {
    if let Ok(n) = s.parse::<i64>() {
        return Ok(Number::Int(n));
    }
    s.parse::<f64>()
        .map(Number::Float)
        .map_err(|_| f!("invalid number: {s}"))
}

/// The whole input in one numeric domain.
#[derive(Debug, PartialEq)]
enum Numbers {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
}

/// Integers only when every token is an integer; otherwise everything widens to `f64`.
fn unify(numbers: &[Number]) -> Numbers {
    let integers: Option<Vec<i64>> = numbers
        .iter()
        .map(|n| match n {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        })
        .collect();

    match integers {
        Some(integers) => Numbers::Integers(integers),
        None => Numbers::Floats(
            numbers
                .iter()
                .map(|n| match n {
                    Number::Int(i) => *i as f64,
                    Number::Float(x) => *x,
                })
                .collect(),
        ),
    }
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Summarizing {} numbers", app.numbers.len());
    }

    let numbers = unify(&app.numbers);

    if app.json {
        println!("{}", format_stats_json(&numbers)?);
        return Ok(());
    }

    let table = match &numbers {
        Numbers::Integers(n) => summarize(n).map(|s| format_stats_table(&s)),
        Numbers::Floats(n) => summarize(n).map(|s| format_stats_table(&s)),
    };

    match table {
        Some(table) => table.printstd(),
        None => println!("{}", "No numbers provided".yellow()),
    }

    Ok(())
}

/// `{}` for empty input, otherwise the five summary keys.
fn format_stats_json(numbers: &Numbers) -> Result<String> {
    let map = match numbers {
        Numbers::Integers(n) => summary_map(n),
        Numbers::Floats(n) => summary_map(n),
    };
    serde_json::to_string_pretty(&map).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_stats_table<T: Numeric>(summary: &Summary<T>) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["count", summary.count]);
    table.add_row(prettytable::row!["sum", summary.sum]);
    table.add_row(prettytable::row!["average", summary.average]);
    table.add_row(prettytable::row!["min", summary.min]);
    table.add_row(prettytable::row!["max", summary.max]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("5"), Ok(Number::Int(5)));
        assert_eq!(parse_number("-3"), Ok(Number::Int(-3)));
        assert_eq!(parse_number("2.5"), Ok(Number::Float(2.5)));
        assert_eq!(parse_number("abc"), Err("invalid number: abc".to_string()));
    }

    #[test]
    fn test_unify_keeps_integers() {
        let numbers = [Number::Int(1), Number::Int(2)];
        assert_eq!(unify(&numbers), Numbers::Integers(vec![1, 2]));
    }

    #[test]
    fn test_unify_widens_mixed_input() {
        let numbers = [Number::Int(1), Number::Float(2.5)];
        assert_eq!(unify(&numbers), Numbers::Floats(vec![1.0, 2.5]));
    }

    #[test]
    fn test_format_stats_json_empty() {
        assert_eq!(format_stats_json(&unify(&[])).unwrap(), "{}");
    }

    #[test]
    fn test_format_stats_json_integers() {
        let numbers: Vec<Number> = (1..=5).map(Number::Int).collect();
        let json = format_stats_json(&unify(&numbers)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!({"count": 5, "sum": 15, "average": 3.0, "min": 1, "max": 5})
        );
        assert!(value["sum"].is_i64());
        assert!(value["min"].is_i64());
    }

    #[test]
    fn test_format_stats_json_floats() {
        let numbers = [Number::Float(1.5), Number::Int(2)];
        let json = format_stats_json(&unify(&numbers)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["sum"], 3.5);
        assert_eq!(value["min"], 1.5);
        assert_eq!(value["max"], 2.0);
    }

    #[test]
    fn test_format_stats_table_rows() {
        let summary = summarize(&[2i64, 4]).unwrap();
        let table = format_stats_table(&summary);
        assert_eq!(table.len(), 5);
    }
}
