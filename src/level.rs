//! Severity levels and per-tag thresholds.
//!
//! Levels carry the platform priority numbers so that the low-level
//! `println` primitive can accept raw priorities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;

/// Severity of a record, ordered from least to most severe.
///
/// Option files accept the same spellings as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    /// Fine-grained tracing output.
    Verbose,
    /// Information useful while debugging.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected that the program recovered from.
    Warn,
    /// A failure of the current operation.
    Error,
    /// A condition that should never happen ("what a terrible failure").
    Assert,
}

impl LogLevel {
    /// All levels, least severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Assert,
    ];

    /// Platform priority number (2 for verbose through 7 for assert).
    pub const fn priority(self) -> i32 {
        match self {
            LogLevel::Verbose => 2,
            LogLevel::Debug => 3,
            LogLevel::Info => 4,
            LogLevel::Warn => 5,
            LogLevel::Error => 6,
            LogLevel::Assert => 7,
        }
    }

    /// Maps a platform priority number back to a level.
    pub fn from_priority(priority: i32) -> Result<Self, InvalidArgument> {
        match priority {
            2 => Ok(LogLevel::Verbose),
            3 => Ok(LogLevel::Debug),
            4 => Ok(LogLevel::Info),
            5 => Ok(LogLevel::Warn),
            6 => Ok(LogLevel::Error),
            7 => Ok(LogLevel::Assert),
            other => Err(InvalidArgument::UnknownPriority(other)),
        }
    }

    /// Single-letter code used in plain output.
    pub const fn letter(self) -> char {
        match self {
            LogLevel::Verbose => 'V',
            LogLevel::Debug => 'D',
            LogLevel::Info => 'I',
            LogLevel::Warn => 'W',
            LogLevel::Error => 'E',
            LogLevel::Assert => 'A',
        }
    }

    /// Lowercase name, also used as a metrics label.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Assert => "assert",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = InvalidArgument;

    /// Accepts the level name or its letter, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" | "v" => Ok(LogLevel::Verbose),
            "debug" | "d" => Ok(LogLevel::Debug),
            "info" | "i" => Ok(LogLevel::Info),
            "warn" | "warning" | "w" => Ok(LogLevel::Warn),
            "error" | "e" => Ok(LogLevel::Error),
            "assert" | "wtf" | "a" => Ok(LogLevel::Assert),
            _ => Err(InvalidArgument::UnknownLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = InvalidArgument;

    fn try_from(s: String) -> Result<Self, InvalidArgument> {
        s.parse()
    }
}

/// Threshold applied to a single tag.
///
/// `Suppress` turns off every level for the tag, including `Assert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LevelFilter {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
    Suppress,
}

impl LevelFilter {
    /// Whether a record at `level` passes this threshold.
    pub fn allows(self, level: LogLevel) -> bool {
        match self.threshold() {
            Some(min) => level >= min,
            None => false,
        }
    }

    fn threshold(self) -> Option<LogLevel> {
        match self {
            LevelFilter::Verbose => Some(LogLevel::Verbose),
            LevelFilter::Debug => Some(LogLevel::Debug),
            LevelFilter::Info => Some(LogLevel::Info),
            LevelFilter::Warn => Some(LogLevel::Warn),
            LevelFilter::Error => Some(LogLevel::Error),
            LevelFilter::Assert => Some(LogLevel::Assert),
            LevelFilter::Suppress => None,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Verbose => LevelFilter::Verbose,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Assert => LevelFilter::Assert,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("suppress") {
            return Ok(LevelFilter::Suppress);
        }
        s.parse::<LogLevel>().map(LevelFilter::from)
    }
}

impl TryFrom<String> for LevelFilter {
    type Error = InvalidArgument;

    fn try_from(s: String) -> Result<Self, InvalidArgument> {
        s.parse()
    }
}
