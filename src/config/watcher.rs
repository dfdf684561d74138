//! Option file watcher for hot reload.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::parse_option;
use crate::facade::Log;

/// Monitors an option file and installs every valid revision into a facade.
pub struct OptionWatcher {
    path: PathBuf,
    log: Arc<Log>,
}

impl OptionWatcher {
    /// Create a new watcher for `path` feeding `log`.
    pub fn new(path: &Path, log: Arc<Log>) -> Self {
        Self {
            path: path.to_path_buf(),
            log,
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// The parent directory is watched rather than the file, so saves that
    /// rename a new file over the old one keep being picked up. Watching
    /// stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = absolute(&self.path);
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = path.file_name().map(|name| name.to_os_string());
        let log = self.log;
        let target = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let touches_file = event
                        .paths
                        .iter()
                        .any(|p| p == &target || p.file_name() == file_name.as_deref());
                    if touches_file && (event.kind.is_modify() || event.kind.is_create()) {
                        reload(&target, &log);
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Option watcher started");
        Ok(watcher)
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn reload(path: &Path, log: &Log) {
    tracing::info!("Option file change detected, reloading...");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to read option file: {}. Keeping current option.", e);
            return;
        }
    };
    // Truncation shows up as its own event; the real content follows.
    if content.trim().is_empty() {
        tracing::debug!("Option file is empty, waiting for content");
        return;
    }
    let option = match parse_option(&content) {
        Ok(option) => option,
        Err(e) => {
            tracing::error!("Failed to reload option: {}. Keeping current option.", e);
            return;
        }
    };
    if let Err(e) = log.set_option(option) {
        tracing::error!("Failed to install option: {}. Keeping current option.", e);
    }
}
