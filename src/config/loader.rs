//! Option loading from disk.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LogOption;
use crate::config::validation::{validate_option, ValidationError};

/// Error type for option loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate an option from TOML text.
pub fn parse_option(content: &str) -> Result<LogOption, ConfigError> {
    let option: LogOption = toml::from_str(content)?;
    validate_option(&option).map_err(ConfigError::Validation)?;
    Ok(option)
}

/// Load and validate an option from a TOML file.
pub fn load_option(path: &Path) -> Result<LogOption, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_option(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("log.toml");
        fs::write(&path, "file_enabled = true\nmin_level = \"warn\"\n").unwrap();

        let option = load_option(&path).unwrap();
        assert!(option.file_enabled);
        assert_eq!(option.min_level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = load_option(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_bad_level_is_parse_error() {
        let err = parse_option("min_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_tag_key_is_validation_error() {
        let err = parse_option("[tag_levels]\n\"\" = \"debug\"\n").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other}"),
        }
        assert!(parse_option("[tag_levels]\n\"\" = \"debug\"\n")
            .unwrap_err()
            .to_string()
            .starts_with("Validation failed: "));
    }
}
