//! Timestamps, formatted messages and event log lines.

use chrono::{DateTime, Utc};
use std::io::{self, Write};

/// Format used for every timestamp the application prints.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Author used by [`format_message`] when none is given.
pub const DEFAULT_AUTHOR: &str = "System";

/// Convert a UTC instant to `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current wall-clock time in UTC, formatted with [`TIMESTAMP_FORMAT`].
pub fn current_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// `[<timestamp>] <author>: <message>` for a fixed instant.
pub fn format_message_at(at: DateTime<Utc>, message: &str, author: Option<&str>) -> String {
    format!(
        "[{}] {}: {}",
        format_timestamp(at),
        author.unwrap_or(DEFAULT_AUTHOR),
        message
    )
}

/// Format a message with the current timestamp and an author.
///
/// `author` defaults to [`DEFAULT_AUTHOR`]. Neither argument is validated.
pub fn format_message(message: &str, author: Option<&str>) -> String {
    format_message_at(Utc::now(), message, author)
}

/// `[<timestamp>] <EVENT_TYPE>: <message>` for a fixed instant.
pub fn log_line_at(at: DateTime<Utc>, event_type: &str, message: &str) -> String {
    format!(
        "[{}] {}: {}",
        format_timestamp(at),
        event_type.to_uppercase(),
        message
    )
}

/// Build an event log line, write it (plus a newline) to `out` and return it.
///
/// The shell passes stdout; tests pass a `Vec<u8>`. The only failure mode is
/// the sink itself failing to accept the write.
pub fn log_event<W: Write>(out: &mut W, event_type: &str, message: &str) -> io::Result<String> {
    let entry = log_line_at(Utc::now(), event_type, message);
    writeln!(out, "{entry}")?;
    out.flush()?;
    Ok(entry)
}
