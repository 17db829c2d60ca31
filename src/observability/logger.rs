//! Structured JSON logger
//!
//! - Synchronous, no buffering
//! - One log line = one event
//! - `event`, `severity` and `ts` first, then fields in alphabetical order

use chrono::Utc;
use std::fmt;
use std::io::{self, Write};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured logger writing one JSON object per line.
pub struct Logger;

impl Logger {
    /// Log an event at `Trace`.
    pub fn trace(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    /// Log an event at `Info`.
    pub fn info(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log an event at `Warn`.
    pub fn warn(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log an event at `Error`.
    pub fn error(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut out = io::stdout();
        // A failed log write must never fail the operation being logged.
        let _ = writeln!(out, "{}", line);
    }

    /// Render a log line without writing it. Exposed for tests.
    pub fn render(severity: Severity, event: Event, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<(&str, &str)> = fields.to_vec();
        sorted.sort_by_key(|(key, _)| *key);

        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":");
        Self::push_json_str(&mut line, event.as_str());
        line.push_str(",\"severity\":");
        Self::push_json_str(&mut line, severity.as_str());
        line.push_str(",\"ts\":");
        Self::push_json_str(&mut line, &Utc::now().to_rfc3339());
        for (key, value) in sorted {
            line.push(',');
            Self::push_json_str(&mut line, key);
            line.push(':');
            Self::push_json_str(&mut line, value);
        }
        line.push('}');
        line
    }

    fn push_json_str(out: &mut String, raw: &str) {
        // serde_json handles escaping; a string never fails to serialize.
        match serde_json::to_string(raw) {
            Ok(quoted) => out.push_str(&quoted),
            Err(_) => out.push_str("\"\""),
        }
    }
}
