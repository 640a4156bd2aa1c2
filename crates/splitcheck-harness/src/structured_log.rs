//! Structured logging for suite runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record for per-comparison outcomes.
//! - [`LogEmitter`]: writes JSONL lines to a file or stderr.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
}

/// Comparison outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `level`, `event`. Optional fields carry
/// per-comparison context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl LogEntry {
    /// Build an entry for a single comparison outcome.
    #[must_use]
    pub fn comparison(
        timestamp: impl Into<String>,
        campaign: &str,
        backend: &str,
        case: &str,
        outcome: Outcome,
        diagnostic: Option<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: match outcome {
                Outcome::Pass => LogLevel::Info,
                Outcome::Fail => LogLevel::Error,
            },
            event: String::from("comparison"),
            campaign: Some(campaign.to_string()),
            backend: Some(backend.to_string()),
            case: Some(case.to_string()),
            outcome: Some(outcome),
            diagnostic,
        }
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Validate one JSONL line against the [`LogEntry`] schema.
pub fn validate_log_line(line: &str) -> Result<LogEntry, serde_json::Error> {
    serde_json::from_str(line)
}

/// Writes JSONL log lines to a file or stderr.
pub struct LogEmitter {
    sink: Box<dyn Write>,
}

impl LogEmitter {
    /// Emit to a file, truncating any existing content.
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            sink: Box::new(file),
        })
    }

    /// Emit to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self {
            sink: Box::new(std::io::stderr()),
        }
    }

    /// Write one entry as a JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.sink, "{line}")
    }
}
