//! Shared utilities for integration tests.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use taglog::sink::MemorySink;
use taglog::{Log, LogLevel, LogOption, LogSink};

/// A facade with console and file output off, capturing into memory.
#[allow(dead_code)]
pub fn capturing_log(min_level: LogLevel) -> (Log, Arc<MemorySink>) {
    let memory = Arc::new(MemorySink::new());
    let sink: Arc<dyn LogSink> = memory.clone();
    let option = LogOption::new(false, false).with_min_level(min_level);
    let log = Log::with_sinks(option, vec![sink]).unwrap();
    (log, memory)
}

/// Writes an option file, replacing any previous content.
#[allow(dead_code)]
pub fn write_option(path: &Path, toml: &str) {
    std::fs::write(path, toml).unwrap();
}

/// Polls `condition` until it holds or `timeout` passes.
#[allow(dead_code)]
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    condition()
}

/// Error with a source, for stack trace assertions.
#[derive(Debug)]
#[allow(dead_code)]
pub struct Wrapped {
    pub context: &'static str,
    pub source: std::io::Error,
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.context)
    }
}

impl std::error::Error for Wrapped {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
