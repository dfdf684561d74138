//! Rendering of records into bytes for sinks.

use std::io;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Output layout for console and file sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// logcat "threadtime" layout, one line per message line.
    #[default]
    Plain,
    /// One JSON object per record.
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    time: String,
    pid: u32,
    thread: &'a str,
    level: &'static str,
    tag: &'a str,
    content: &'static str,
    message: &'a str,
}

impl RecordFormat {
    /// Renders `record`, newline-terminated.
    pub fn render(self, record: &Record) -> io::Result<String> {
        match self {
            RecordFormat::Plain => Ok(render_plain(record)),
            RecordFormat::Json => {
                let line = JsonLine {
                    time: record.timestamp.to_rfc3339(),
                    pid: record.pid,
                    thread: &record.thread,
                    level: record.level.as_str(),
                    tag: &record.tag,
                    content: record.content.as_str(),
                    message: &record.message,
                };
                let mut out = serde_json::to_string(&line)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

fn render_plain(record: &Record) -> String {
    let prefix = format!(
        "{} {:>5} {} {}/{}: ",
        record.timestamp.format("%m-%d %H:%M:%S%.3f"),
        record.pid,
        record.thread,
        record.level.letter(),
        record.tag,
    );

    let mut out = String::with_capacity(prefix.len() + record.message.len() + 1);
    let mut lines = record.message.lines().peekable();
    if lines.peek().is_none() {
        out.push_str(&prefix);
        out.push('\n');
        return out;
    }
    for line in lines {
        out.push_str(&prefix);
        out.push_str(line);
        out.push('\n');
    }
    out
}
