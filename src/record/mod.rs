//! Emitted log records.
//!
//! # Data Flow
//! ```text
//! facade call (tag, level, message)
//!     → Record (timestamp, pid, thread captured here)
//!     → RecordFormat::render (plain line or JSON line)
//!     → every active LogSink
//! ```

pub mod format;

pub use format::RecordFormat;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// Intended content type of a record's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Free-form text.
    Plain,
    /// Pre-formatted JSON handed to `json`.
    Json,
    /// Pre-formatted XML handed to `xml`.
    Xml,
    /// Text produced by a transform in `obj`.
    Object,
}

impl ContentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentKind::Plain => "plain",
            ContentKind::Json => "json",
            ContentKind::Xml => "xml",
            ContentKind::Object => "object",
        }
    }
}

/// A single log record, as handed to sinks.
#[derive(Debug, Clone)]
pub struct Record {
    /// Severity of the record.
    pub level: LogLevel,
    /// Origin of the record, already validated.
    pub tag: String,
    /// Message body, possibly spanning several lines.
    pub message: String,
    /// Intended content type of `message`.
    pub content: ContentKind,
    /// Local wall-clock time of the call.
    pub timestamp: DateTime<Local>,
    /// Id of the emitting process.
    pub pid: u32,
    /// Name of the emitting thread, or its id when unnamed.
    pub thread: String,
}

impl Record {
    /// Captures a record for the current process and thread.
    pub fn new(
        level: LogLevel,
        tag: impl Into<String>,
        message: impl Into<String>,
        content: ContentKind,
    ) -> Self {
        let current = std::thread::current();
        let thread = current
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{:?}", current.id()));

        Self {
            level,
            tag: tag.into(),
            message: message.into(),
            content,
            timestamp: Local::now(),
            pid: std::process::id(),
            thread,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_captures_process_and_thread() {
        let handle = std::thread::Builder::new()
            .name("recorder".into())
            .spawn(|| Record::new(LogLevel::Info, "Tag", "hello", ContentKind::Plain))
            .unwrap();
        let record = handle.join().unwrap();

        assert_eq!(record.pid, std::process::id());
        assert_eq!(record.thread, "recorder");
        assert_eq!(record.tag, "Tag");
        assert_eq!(record.content, ContentKind::Plain);
    }
}
