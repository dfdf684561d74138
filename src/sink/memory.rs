//! In-memory sink.

use std::io;
use std::sync::{Mutex, MutexGuard};

use crate::record::{Record, RecordFormat};
use crate::sink::LogSink;

/// Keeps every record it receives.
///
/// Useful for tests and for hosts that render logs themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Messages of the captured records, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    /// Reports the plain-rendered length so byte counts match a console sink.
    fn write(&self, record: &Record) -> io::Result<usize> {
        let len = RecordFormat::Plain.render(record)?.len();
        self.lock().push(record.clone());
        Ok(len)
    }
}
