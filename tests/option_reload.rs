//! Option files and hot reload.

use std::sync::Arc;
use std::time::Duration;

use taglog::config::{load_option, ConfigError, OptionWatcher};
use taglog::{Log, LogLevel, LogOption};

mod common;

#[test]
fn test_loaded_option_installs() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("log.toml");
    common::write_option(
        &path,
        r#"
        console_enabled = false
        min_level = "warn"

        [tag_levels]
        Net = "verbose"
        "#,
    );

    let log = Log::with_option(load_option(&path).unwrap()).unwrap();
    assert!(!log.is_loggable("Disk", LogLevel::Info).unwrap());
    assert!(log.is_loggable("Net", LogLevel::Verbose).unwrap());
}

#[test]
fn test_validation_errors_are_reported_together() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("log.toml");
    common::write_option(
        &path,
        r#"
        file_enabled = true
        file_prefix = ""

        [tag_levels]
        "" = "debug"
        "#,
    );

    match load_option(&path).unwrap_err() {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation errors, got {other}"),
    }
}

#[test]
fn test_watcher_applies_changes_and_ignores_broken_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("log.toml");
    common::write_option(&path, "console_enabled = false\nmin_level = \"info\"\n");

    let log = Arc::new(Log::with_option(load_option(&path).unwrap()).unwrap());
    let _watcher = OptionWatcher::new(&path, Arc::clone(&log)).run().unwrap();

    common::write_option(&path, "console_enabled = false\nmin_level = \"debug\"\n");
    assert!(common::wait_until(Duration::from_secs(10), || {
        log.option().min_level == LogLevel::Debug
    }));

    // A broken revision leaves the last good option in place.
    common::write_option(&path, "min_level = \"loud\"\n");
    std::thread::sleep(Duration::from_millis(500));
    assert_eq!(log.option().min_level, LogLevel::Debug);
    assert_eq!(
        *log.option(),
        LogOption::new(false, false).with_min_level(LogLevel::Debug)
    );
}

/// Saves `toml` the way editors do: write a sibling file, rename it over `path`.
fn save_by_rename(path: &std::path::Path, toml: &str) {
    let staged = path.with_extension("toml.swp");
    common::write_option(&staged, toml);
    std::fs::rename(&staged, path).unwrap();
}

#[test]
fn test_watcher_follows_repeated_rename_saves() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("log.toml");
    common::write_option(&path, "console_enabled = false\nmin_level = \"info\"\n");

    let log = Arc::new(Log::with_option(load_option(&path).unwrap()).unwrap());
    let _watcher = OptionWatcher::new(&path, Arc::clone(&log)).run().unwrap();

    save_by_rename(&path, "console_enabled = false\nmin_level = \"debug\"\n");
    assert!(common::wait_until(Duration::from_secs(10), || {
        log.option().min_level == LogLevel::Debug
    }));

    save_by_rename(&path, "console_enabled = false\nmin_level = \"error\"\n");
    assert!(common::wait_until(Duration::from_secs(10), || {
        log.option().min_level == LogLevel::Error
    }));
}
