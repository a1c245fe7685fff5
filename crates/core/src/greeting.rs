//! Lines printed by the interactive greeting flow.

use crate::config::AppConfig;
use crate::report::format_timestamp;
use crate::stats::summarize;
use chrono::{DateTime, NaiveDate, Utc};

/// Numbers used for the sample calculation shown after a greeting.
pub const SAMPLE_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Printed when the entered name fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input provided";

pub const NAME_PROMPT: &str = "Enter your name: ";

pub fn welcome_lines(config: &AppConfig, started_at: DateTime<Utc>) -> Vec<String> {
    vec![
        format!("Welcome to {} v{}", config.app.name, config.app.version),
        format!("Application started at: {}", format_timestamp(started_at)),
    ]
}

/// The sample calculation block. Empty input produces only the header and list.
pub fn calculation_lines(numbers: &[i64]) -> Vec<String> {
    let listed = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        "Sample calculation:".to_string(),
        format!("Numbers: [{listed}]"),
    ];

    if let Some(summary) = summarize(numbers) {
        lines.push(format!("Sum: {}", summary.sum));
        lines.push(format!("Average: {:.2}", summary.average));
    }

    lines
}

/// Greeting for an already validated `name`.
pub fn greeting_lines(
    config: &AppConfig,
    name: &str,
    today: NaiveDate,
    numbers: &[i64],
) -> Vec<String> {
    let mut lines = vec![
        format!("Hello, {name}!"),
        format!("Today's date is: {}", today.format("%Y-%m-%d")),
    ];
    lines.extend(calculation_lines(numbers));
    lines.push(format!("Thank you for using {}!", config.app.name));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_welcome_lines() {
        let config = AppConfig::default();
        let started = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(
            welcome_lines(&config, started),
            vec![
                "Welcome to GitHub Webhook Test Application v1.0.0",
                "Application started at: 2025-01-02 03:04:05 UTC",
            ]
        );
    }

    #[test]
    fn test_greeting_lines() {
        let config = AppConfig::default();
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        assert_eq!(
            greeting_lines(&config, "Travis", today, &SAMPLE_NUMBERS),
            vec![
                "Hello, Travis!",
                "Today's date is: 2025-06-30",
                "Sample calculation:",
                "Numbers: [1, 2, 3, 4, 5]",
                "Sum: 15",
                "Average: 3.00",
                "Thank you for using GitHub Webhook Test Application!",
            ]
        );
    }

    #[test]
    fn test_calculation_lines_rounds_average() {
        let lines = calculation_lines(&[1, 2]);
        assert_eq!(lines[2], "Sum: 3");
        assert_eq!(lines[3], "Average: 1.50");
    }

    #[test]
    fn test_calculation_lines_empty() {
        assert_eq!(
            calculation_lines(&[]),
            vec!["Sample calculation:", "Numbers: []"]
        );
    }
}
