//! Console sink.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordFormat};
use crate::sink::LogSink;

/// Standard stream the console sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

/// Writes rendered records to a standard stream.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    target: ConsoleTarget,
    format: RecordFormat,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget, format: RecordFormat) -> Self {
        Self { target, format }
    }
}

impl LogSink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn write(&self, record: &Record) -> io::Result<usize> {
        let rendered = self.format.render(record)?;
        // One write_all under the stream lock keeps multi-line records together.
        match self.target {
            ConsoleTarget::Stderr => io::stderr().lock().write_all(rendered.as_bytes())?,
            ConsoleTarget::Stdout => io::stdout().lock().write_all(rendered.as_bytes())?,
        }
        Ok(rendered.len())
    }

    fn flush(&self) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stderr => io::stderr().flush(),
            ConsoleTarget::Stdout => io::stdout().flush(),
        }
    }
}
