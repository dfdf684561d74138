//! Error types for the logging facade.

use std::io;

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Boxed error produced by caller-supplied code such as transforms.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`Log`](crate::Log) operations.
#[derive(Debug, Error)]
pub enum LogError {
    /// A tag, priority or level name was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// The caller-supplied transform failed; nothing was emitted.
    #[error("transform failed for tag {tag}: {source}")]
    Transform {
        tag: String,
        #[source]
        source: BoxError,
    },

    /// A sink could not open, write or flush.
    #[error("sink {sink} failed: {source}")]
    Sink {
        sink: &'static str,
        #[source]
        source: io::Error,
    },

    /// An option file could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Malformed arguments handed to the facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("tag must not be empty")]
    EmptyTag,

    #[error("tag \"{tag}\" is {len} characters, the maximum is {max}")]
    TagTooLong { tag: String, len: usize, max: usize },

    #[error("unknown priority {0}")]
    UnknownPriority(i32),

    #[error("unknown level \"{0}\"")]
    UnknownLevel(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = LogError> = std::result::Result<T, E>;
