//! Daily log file sink.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDate};

use crate::level::LogLevel;
use crate::record::{Record, RecordFormat};
use crate::sink::LogSink;

/// Flush at least this often even when only low-severity records arrive.
const FLUSH_BATCH_SIZE: u32 = 64;

/// Appends records to `<dir>/<prefix>-YYYYMMDD.log`.
///
/// A new file is started when the local date of a record differs from the
/// date of the open file. Warn-or-higher records are flushed immediately so
/// they survive a crash.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
    prefix: String,
    format: RecordFormat,
    state: Mutex<FileState>,
}

#[derive(Debug)]
struct FileState {
    date: NaiveDate,
    path: PathBuf,
    writer: BufWriter<File>,
    pending: u32,
}

/// File name used for `date`.
pub fn file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.log", prefix, date.format("%Y%m%d"))
}

impl FileSink {
    /// Creates `dir` if needed and opens today's file for appending.
    pub fn open(dir: impl AsRef<Path>, prefix: &str, format: RecordFormat) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let date = Local::now().date_naive();
        let state = FileState::open(&dir, prefix, date)?;
        tracing::debug!(path = %state.path.display(), "Log file opened");

        Ok(Self {
            dir,
            prefix: prefix.to_string(),
            format,
            state: Mutex::new(state),
        })
    }

    /// Path of the file currently being written.
    pub fn current_path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FileState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileState {
    fn open(dir: &Path, prefix: &str, date: NaiveDate) -> io::Result<Self> {
        let path = dir.join(file_name(prefix, date));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            date,
            path,
            writer: BufWriter::new(file),
            pending: 0,
        })
    }
}

impl LogSink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write(&self, record: &Record) -> io::Result<usize> {
        let rendered = self.format.render(record)?;
        let mut state = self.lock();

        let date = record.timestamp.date_naive();
        if date != state.date {
            state.writer.flush()?;
            *state = FileState::open(&self.dir, &self.prefix, date)?;
            tracing::debug!(path = %state.path.display(), "Log file rolled over");
        }

        state.writer.write_all(rendered.as_bytes())?;
        state.pending += 1;

        if record.level >= LogLevel::Warn || state.pending >= FLUSH_BATCH_SIZE {
            state.writer.flush()?;
            state.pending = 0;
        }

        Ok(rendered.len())
    }

    fn flush(&self) -> io::Result<()> {
        let mut state = self.lock();
        state.pending = 0;
        state.writer.flush()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(path = %self.lock().path.display(), error = %e, "Flush on close failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ContentKind;

    #[test]
    fn test_file_name_uses_compact_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(file_name("app", date), "app-20240307.log");
    }

    #[test]
    fn test_creates_directory_and_appends() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("logs");

        let sink = FileSink::open(&dir, "unit", RecordFormat::Plain).unwrap();
        let expected = dir.join(file_name("unit", Local::now().date_naive()));
        assert_eq!(sink.current_path(), expected);

        let record = Record::new(LogLevel::Info, "Disk", "persisted", ContentKind::Plain);
        let written = sink.write(&record).unwrap();
        sink.flush().unwrap();

        let content = fs::read_to_string(&expected).unwrap();
        assert_eq!(content.len(), written);
        assert!(content.contains("I/Disk: persisted"));
    }

    #[test]
    fn test_warn_records_are_flushed_immediately() {
        let temp = tempfile::tempdir().unwrap();
        let sink = FileSink::open(temp.path(), "unit", RecordFormat::Plain).unwrap();

        let record = Record::new(LogLevel::Error, "Disk", "boom", ContentKind::Plain);
        sink.write(&record).unwrap();

        let content = fs::read_to_string(sink.current_path()).unwrap();
        assert!(content.contains("E/Disk: boom"));
    }

    #[test]
    fn test_reopening_appends_to_same_file() {
        let temp = tempfile::tempdir().unwrap();
        {
            let sink = FileSink::open(temp.path(), "unit", RecordFormat::Json).unwrap();
            sink.write(&Record::new(LogLevel::Info, "A", "one", ContentKind::Plain))
                .unwrap();
        }
        let sink = FileSink::open(temp.path(), "unit", RecordFormat::Json).unwrap();
        sink.write(&Record::new(LogLevel::Info, "A", "two", ContentKind::Plain))
            .unwrap();
        sink.flush().unwrap();

        let content = fs::read_to_string(sink.current_path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_next_day_record_rolls_to_new_file() {
        let temp = tempfile::tempdir().unwrap();
        let sink = FileSink::open(temp.path(), "unit", RecordFormat::Plain).unwrap();
        let today = sink.current_path();

        let mut record = Record::new(LogLevel::Info, "Clock", "tomorrow", ContentKind::Plain);
        record.timestamp += chrono::Duration::days(1);
        sink.write(&record).unwrap();
        sink.flush().unwrap();

        let tomorrow = sink.current_path();
        assert_ne!(tomorrow, today);
        assert_eq!(
            tomorrow,
            temp.path()
                .join(file_name("unit", record.timestamp.date_naive()))
        );
        let content = fs::read_to_string(&tomorrow).unwrap();
        assert!(content.contains("I/Clock: tomorrow"));
    }

    #[test]
    fn test_low_severity_records_flush_in_batches() {
        let temp = tempfile::tempdir().unwrap();
        let sink = FileSink::open(temp.path(), "unit", RecordFormat::Plain).unwrap();
        let path = sink.current_path();

        // Short lines keep the whole batch inside the write buffer.
        let mut record = Record::new(LogLevel::Info, "Batch", "queued", ContentKind::Plain);
        record.thread = "t".to_string();
        for _ in 1..FLUSH_BATCH_SIZE {
            sink.write(&record).unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        sink.write(&record).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), FLUSH_BATCH_SIZE as usize);
    }
}
