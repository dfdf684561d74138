//! Option validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every `tag_levels` key is a valid tag
//! - Check file output settings when file output is enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: LogOption → Result<(), Vec<ValidationError>>
//! - Runs before an option is installed into a facade

use std::path::MAIN_SEPARATOR;

use thiserror::Error;

use crate::config::schema::LogOption;
use crate::error::InvalidArgument;
use crate::facade::tag::validate_tag;

/// A single semantic problem in a `LogOption`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("tag_levels key {key:?}: {reason}")]
    InvalidTag { key: String, reason: InvalidArgument },

    #[error("file_dir must not be empty when file output is enabled")]
    EmptyFileDir,

    #[error("file_prefix must not be empty")]
    EmptyFilePrefix,

    #[error("file_prefix {0:?} must not contain path separators")]
    FilePrefixHasSeparator(String),
}

/// Validates `option`, collecting every problem found.
pub fn validate_option(option: &LogOption) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for key in option.tag_levels.keys() {
        if let Err(reason) = validate_tag(key) {
            errors.push(ValidationError::InvalidTag {
                key: key.clone(),
                reason,
            });
        }
    }

    if option.file_enabled {
        if option.file_dir.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyFileDir);
        }
        if option.file_prefix.is_empty() {
            errors.push(ValidationError::EmptyFilePrefix);
        } else if option.file_prefix.contains(['/', MAIN_SEPARATOR]) {
            errors.push(ValidationError::FilePrefixHasSeparator(
                option.file_prefix.clone(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
