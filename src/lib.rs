//! Tagged, leveled logging facade.
//!
//! ```no_run
//! use taglog::{Log, LogLevel, LogOption};
//!
//! let log = Log::with_option(LogOption::new(true, true).with_min_level(LogLevel::Debug))?;
//! log.d("Startup", "configuration loaded", None)?;
//! log.json("Api", r#"{"status":"ok"}"#)?;
//! # Ok::<(), taglog::LogError>(())
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod level;
pub mod macros;
pub mod observability;
pub mod record;
pub mod sink;
pub mod transform;

pub use config::{LogOption, OptionWatcher};
pub use error::{InvalidArgument, LogError};
pub use facade::{global, stack_trace_string, Log, MAX_TAG_LEN};
pub use level::{LevelFilter, LogLevel};
pub use record::{ContentKind, Record, RecordFormat};
pub use sink::LogSink;
