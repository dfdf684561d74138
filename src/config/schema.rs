//! Option schema definitions.
//!
//! `LogOption` is the complete configuration of a facade. It derives Serde
//! traits so it can be read from TOML option files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::{LevelFilter, LogLevel};
use crate::record::RecordFormat;
use crate::sink::ConsoleTarget;

/// Configuration installed into a [`Log`](crate::Log).
///
/// Once installed an option is shared read-only; changing configuration
/// means installing a new option.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogOption {
    /// Write records to the console.
    pub console_enabled: bool,

    /// Write records to daily log files.
    pub file_enabled: bool,

    /// Lowest level emitted for tags without an override.
    pub min_level: LogLevel,

    /// Directory holding the log files.
    pub file_dir: PathBuf,

    /// File name prefix; files are named `<prefix>-YYYYMMDD.log`.
    pub file_prefix: String,

    /// Output layout for console and file.
    pub format: RecordFormat,

    /// Standard stream used by the console sink.
    pub console_target: ConsoleTarget,

    /// Per-tag thresholds overriding `min_level`.
    pub tag_levels: BTreeMap<String, LevelFilter>,
}

impl Default for LogOption {
    fn default() -> Self {
        Self {
            console_enabled: true,
            file_enabled: false,
            min_level: LogLevel::Info,
            file_dir: PathBuf::from(default_file_dir()),
            file_prefix: default_file_prefix().to_string(),
            format: RecordFormat::Plain,
            console_target: ConsoleTarget::Stderr,
            tag_levels: BTreeMap::new(),
        }
    }
}

impl LogOption {
    /// Default option with the two output switches set.
    pub fn new(console: bool, file: bool) -> Self {
        Self {
            console_enabled: console,
            file_enabled: file,
            ..Self::default()
        }
    }

    /// Same option with a different minimum level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Same option with log files written under `dir`.
    pub fn with_file_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file_dir = dir.into();
        self
    }

    /// Same option with an added per-tag threshold.
    pub fn with_tag_level(mut self, tag: impl Into<String>, filter: LevelFilter) -> Self {
        self.tag_levels.insert(tag.into(), filter);
        self
    }
}

/// Default directory for log files.
pub fn default_file_dir() -> &'static str {
    "logs"
}

/// Default log file prefix.
pub fn default_file_prefix() -> &'static str {
    "taglog"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_platform() {
        let option = LogOption::default();
        assert!(option.console_enabled);
        assert!(!option.file_enabled);
        assert_eq!(option.min_level, LogLevel::Info);
        assert_eq!(option.file_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_new_sets_switches_only() {
        let option = LogOption::new(false, true);
        assert!(!option.console_enabled);
        assert!(option.file_enabled);
        assert_eq!(option.file_prefix, "taglog");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let option: LogOption = toml::from_str(
            r#"
            min_level = "debug"
            format = "json"

            [tag_levels]
            Noisy = "suppress"
            Net = "verbose"
            "#,
        )
        .unwrap();

        assert!(option.console_enabled);
        assert_eq!(option.min_level, LogLevel::Debug);
        assert_eq!(option.format, RecordFormat::Json);
        assert_eq!(option.tag_levels["Noisy"], LevelFilter::Suppress);
        assert_eq!(option.tag_levels["Net"], LevelFilter::Verbose);
    }

    #[test]
    fn test_wtf_alias_in_toml() {
        let option: LogOption = toml::from_str(r#"min_level = "wtf""#).unwrap();
        assert_eq!(option.min_level, LogLevel::Assert);
    }
}
