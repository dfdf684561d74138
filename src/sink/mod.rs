//! Destinations for rendered records.
//!
//! # Responsibilities
//! - Define the `LogSink` seam the facade writes through
//! - Console output (stderr or stdout)
//! - Daily log files under a configured directory
//! - In-memory capture for tests and embedding
//!
//! # Design Decisions
//! - Sinks are shared as `Arc<dyn LogSink>` and must be `Send + Sync`
//! - A sink serialises its own writes; the facade never locks around it
//! - `write` reports the bytes the sink accepted, which `println` returns

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;
pub use memory::MemorySink;

use std::io;

use crate::record::Record;

/// A destination for log records.
pub trait LogSink: Send + Sync {
    /// Short name used in errors and metrics labels.
    fn name(&self) -> &'static str;

    /// Writes one record and returns the number of bytes accepted.
    fn write(&self, record: &Record) -> io::Result<usize>;

    /// Flushes buffered output.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
