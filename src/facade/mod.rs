//! The logging facade.
//!
//! # Responsibilities
//! - Leveled emission (`v`, `d`, `i`, `w`, `e`, `wtf`) with optional errors
//! - Structured payloads (`json`, `xml`, `obj` with a transform)
//! - Loggability queries and per-tag runtime overrides
//! - The priority-based `println` primitive
//! - A lazily created process-wide instance
//!
//! # Data Flow
//! ```text
//! call(tag, ...)
//!     → validate tag
//!     → load one routing snapshot (option + sinks)
//!     → filter: runtime override > option.tag_levels > option.min_level
//!     → build message (transform / stack trace run only if loggable)
//!     → Record → every sink of the snapshot, then the extra sinks
//! ```
//!
//! # Design Decisions
//! - Option and sinks are swapped together through `ArcSwap`, so a call never
//!   pairs a new option with old sinks
//! - A call loads exactly one snapshot
//! - Sink failures are counted and reported, then the first one is returned

pub mod stack_trace;
pub mod tag;

pub use stack_trace::stack_trace_string;
pub use tag::{validate_tag, MAX_TAG_LEN};

use std::error::Error;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use dashmap::DashMap;

use crate::config::{validate_option, ConfigError, LogOption};
use crate::error::{BoxError, LogError, Result};
use crate::level::{LevelFilter, LogLevel};
use crate::observability::metrics;
use crate::record::{ContentKind, Record};
use crate::sink::{ConsoleSink, FileSink, LogSink};

/// An installed option together with the sinks built from it.
struct Routing {
    option: Arc<LogOption>,
    sinks: Vec<Arc<dyn LogSink>>,
}

impl Routing {
    fn build(option: LogOption) -> Result<Self> {
        validate_option(&option).map_err(ConfigError::Validation)?;

        let mut sinks: Vec<Arc<dyn LogSink>> = Vec::new();
        if option.console_enabled {
            sinks.push(Arc::new(ConsoleSink::new(option.console_target, option.format)));
        }
        if option.file_enabled {
            let sink = FileSink::open(&option.file_dir, &option.file_prefix, option.format)
                .map_err(|source| LogError::Sink {
                    sink: "file",
                    source,
                })?;
            sinks.push(Arc::new(sink));
        }

        Ok(Self {
            option: Arc::new(option),
            sinks,
        })
    }
}

/// Tagged, leveled logger.
///
/// All methods take `&self` and may be called from any thread.
pub struct Log {
    routing: ArcSwap<Routing>,
    overrides: DashMap<String, LevelFilter>,
    extra_sinks: Vec<Arc<dyn LogSink>>,
}

impl Log {
    /// Facade with the default option: console on, file off, `Info` and up.
    pub fn new() -> Self {
        let option = LogOption::default();
        let console: Arc<dyn LogSink> =
            Arc::new(ConsoleSink::new(option.console_target, option.format));
        Self {
            routing: ArcSwap::from_pointee(Routing {
                option: Arc::new(option),
                sinks: vec![console],
            }),
            overrides: DashMap::new(),
            extra_sinks: Vec::new(),
        }
    }

    /// Facade with `option` installed.
    pub fn with_option(option: LogOption) -> Result<Self> {
        Self::with_sinks(option, Vec::new())
    }

    /// Facade with `option` installed and `sinks` receiving every emitted
    /// record in addition to the option's own sinks.
    pub fn with_sinks(option: LogOption, sinks: Vec<Arc<dyn LogSink>>) -> Result<Self> {
        Ok(Self {
            routing: ArcSwap::from_pointee(Routing::build(option)?),
            overrides: DashMap::new(),
            extra_sinks: sinks,
        })
    }

    /// The currently installed option.
    pub fn option(&self) -> Arc<LogOption> {
        Arc::clone(&self.routing.load().option)
    }

    /// Replaces the installed option.
    ///
    /// Sinks for the new option are built first; the option and its sinks
    /// then replace the previous ones in a single atomic store. Calls that
    /// already loaded the previous snapshot finish against it.
    pub fn set_option(&self, option: LogOption) -> Result<()> {
        let routing = Routing::build(option)?;
        tracing::debug!(
            console = routing.option.console_enabled,
            file = routing.option.file_enabled,
            min_level = %routing.option.min_level,
            "Installing log option"
        );

        let previous = self.routing.swap(Arc::new(routing));
        metrics::record_option_swap();

        for sink in &previous.sinks {
            if let Err(e) = sink.flush() {
                tracing::warn!(sink = sink.name(), error = %e, "Flush of replaced sink failed");
            }
        }
        Ok(())
    }

    /// Installs `LogOption::new(console, file)`.
    pub fn set_default_option(&self, console: bool, file: bool) -> Result<()> {
        self.set_option(LogOption::new(console, file))
    }

    /// Overrides the threshold of `tag` until cleared, ahead of the option.
    pub fn set_tag_level(&self, tag: &str, filter: LevelFilter) -> Result<()> {
        validate_tag(tag)?;
        self.overrides.insert(tag.to_string(), filter);
        Ok(())
    }

    /// Removes a runtime override, returning it if there was one.
    pub fn clear_tag_level(&self, tag: &str) -> Option<LevelFilter> {
        self.overrides.remove(tag).map(|(_, filter)| filter)
    }

    /// Whether a record for `tag` at `level` would currently be emitted.
    pub fn is_loggable(&self, tag: &str, level: LogLevel) -> Result<bool> {
        validate_tag(tag)?;
        Ok(self.allows(&self.routing.load().option, tag, level))
    }

    fn allows(&self, option: &LogOption, tag: &str, level: LogLevel) -> bool {
        if let Some(filter) = self.overrides.get(tag) {
            return filter.allows(level);
        }
        if let Some(filter) = option.tag_levels.get(tag) {
            return filter.allows(level);
        }
        level >= option.min_level
    }

    /// Verbose record, with `err` appended when present.
    pub fn v(&self, tag: &str, msg: &str, err: Option<&dyn Error>) -> Result<usize> {
        self.log(LogLevel::Verbose, tag, msg, err)
    }

    /// Debug record, with `err` appended when present.
    pub fn d(&self, tag: &str, msg: &str, err: Option<&dyn Error>) -> Result<usize> {
        self.log(LogLevel::Debug, tag, msg, err)
    }

    /// Info record, with `err` appended when present.
    pub fn i(&self, tag: &str, msg: &str, err: Option<&dyn Error>) -> Result<usize> {
        self.log(LogLevel::Info, tag, msg, err)
    }

    /// Warn record, with `err` appended when present.
    pub fn w(&self, tag: &str, msg: &str, err: Option<&dyn Error>) -> Result<usize> {
        self.log(LogLevel::Warn, tag, msg, err)
    }

    /// Warn record describing only `err`.
    pub fn w_error(&self, tag: &str, err: &dyn Error) -> Result<usize> {
        self.emit(LogLevel::Warn, tag, ContentKind::Plain, || {
            Ok(stack_trace_string(Some(err)))
        })
    }

    /// Error record, with `err` appended when present.
    pub fn e(&self, tag: &str, msg: &str, err: Option<&dyn Error>) -> Result<usize> {
        self.log(LogLevel::Error, tag, msg, err)
    }

    /// "What a terrible failure": a condition that should never happen.
    ///
    /// Emits at `Assert` and returns; the process keeps running.
    pub fn wtf(&self, tag: &str, msg: &str, err: Option<&dyn Error>) -> Result<usize> {
        self.log(LogLevel::Assert, tag, msg, err)
    }

    /// `Assert` record describing only `err`.
    pub fn wtf_error(&self, tag: &str, err: &dyn Error) -> Result<usize> {
        self.emit(LogLevel::Assert, tag, ContentKind::Plain, || {
            Ok(stack_trace_string(Some(err)))
        })
    }

    /// Record at `level`, with `err` appended on a new line when present.
    pub fn log(
        &self,
        level: LogLevel,
        tag: &str,
        msg: &str,
        err: Option<&dyn Error>,
    ) -> Result<usize> {
        self.emit(level, tag, ContentKind::Plain, || {
            Ok(match err {
                Some(err) => format!("{msg}\n{}", stack_trace_string(Some(err))),
                None => msg.to_string(),
            })
        })
    }

    /// Info record whose body is `transform(tag, obj)`.
    ///
    /// The transform only runs when the record is loggable. If it fails the
    /// error is returned as [`LogError::Transform`] and nothing is emitted.
    pub fn obj<T, F, E>(&self, tag: &str, obj: &T, transform: F) -> Result<usize>
    where
        T: ?Sized,
        F: FnOnce(&str, &T) -> std::result::Result<String, E>,
        E: Into<BoxError>,
    {
        self.emit(LogLevel::Info, tag, ContentKind::Object, || {
            transform(tag, obj).map_err(|e| LogError::Transform {
                tag: tag.to_string(),
                source: e.into(),
            })
        })
    }

    /// Info record carrying pre-formatted JSON. The text is not parsed.
    pub fn json(&self, tag: &str, msg: &str) -> Result<usize> {
        self.emit(LogLevel::Info, tag, ContentKind::Json, || Ok(msg.to_string()))
    }

    /// Info record carrying pre-formatted XML. The text is not parsed.
    pub fn xml(&self, tag: &str, msg: &str) -> Result<usize> {
        self.emit(LogLevel::Info, tag, ContentKind::Xml, || Ok(msg.to_string()))
    }

    /// Loggable text for `err`; see [`stack_trace_string`].
    pub fn stack_trace_string(err: Option<&dyn Error>) -> String {
        stack_trace_string(err)
    }

    /// Low-level emission by platform priority (2 = verbose … 7 = assert).
    ///
    /// Returns the bytes accepted by all sinks together, or `0` when the
    /// record is filtered out.
    pub fn println(&self, priority: i32, tag: &str, msg: &str) -> Result<usize> {
        let level = LogLevel::from_priority(priority)?;
        self.emit(level, tag, ContentKind::Plain, || Ok(msg.to_string()))
    }

    /// Flushes every active sink.
    pub fn flush(&self) -> Result<()> {
        let routing = self.routing.load_full();
        for sink in routing.sinks.iter().chain(&self.extra_sinks) {
            sink.flush().map_err(|source| LogError::Sink {
                sink: sink.name(),
                source,
            })?;
        }
        Ok(())
    }

    fn emit<F>(&self, level: LogLevel, tag: &str, content: ContentKind, message: F) -> Result<usize>
    where
        F: FnOnce() -> Result<String>,
    {
        validate_tag(tag)?;

        // One snapshot for the whole call.
        let routing = self.routing.load_full();
        if !self.allows(&routing.option, tag, level) {
            metrics::record_suppressed(level);
            return Ok(0);
        }

        let record = Record::new(level, tag, message()?, content);
        self.dispatch(&routing, &record)
    }

    fn dispatch(&self, routing: &Routing, record: &Record) -> Result<usize> {
        let mut written = 0;
        let mut delivered = false;
        let mut first_failure = None;

        for sink in routing.sinks.iter().chain(&self.extra_sinks) {
            match sink.write(record) {
                Ok(n) => {
                    written += n;
                    delivered = true;
                }
                Err(source) => {
                    metrics::record_sink_failure(sink.name());
                    tracing::warn!(sink = sink.name(), error = %source, "Sink write failed");
                    if first_failure.is_none() {
                        first_failure = Some(LogError::Sink {
                            sink: sink.name(),
                            source,
                        });
                    }
                }
            }
        }
        if delivered {
            metrics::record_emitted(record.level);
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(written),
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<Log> = OnceLock::new();

/// The process-wide facade, created with the default option on first use.
///
/// Reconfigure it with [`Log::set_option`].
pub fn global() -> &'static Log {
    GLOBAL.get_or_init(Log::new)
}
