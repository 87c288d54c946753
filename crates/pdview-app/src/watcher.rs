//! Project file watcher
//!
//! Watches the directory holding the project document and raises
//! `Message::ProjectFileChanged` when the project (or its source map) is
//! written, debounced so editors that save in several steps trigger one
//! reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use pdview_core::{Error, Result};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::{project_dir, WatcherSettings};
use crate::message::Message;

/// Default debounce duration in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Configuration for the project watcher
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Files whose changes trigger a reload, resolved to absolute paths
    pub files: Vec<PathBuf>,
    pub debounce: Duration,
}

impl WatcherConfig {
    /// Watch the project document only
    pub fn new(project_path: impl AsRef<Path>) -> Self {
        Self {
            files: vec![resolve(project_path.as_ref())],
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    /// Also reload when this file changes (the source map)
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = resolve(path.as_ref());
        if !self.files.contains(&path) {
            self.files.push(path);
        }
        self
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }

    /// Apply the `[watcher]` section of the settings file
    pub fn with_settings(self, settings: &WatcherSettings) -> Self {
        self.with_debounce_ms(settings.debounce_ms)
    }

    /// Distinct parent directories of the watched files
    pub fn watch_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = Vec::new();
        for file in &self.files {
            let dir = project_dir(file);
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }

    /// Whether a changed path is one of the watched files
    pub fn is_relevant(&self, path: &Path) -> bool {
        self.files.contains(&resolve(path))
    }
}

/// Absolute form of `path` with its directory canonicalized.
///
/// Only the directory is resolved so files that are being replaced (or do
/// not exist yet) still compare equal to the paths notify reports.
fn resolve(path: &Path) -> PathBuf {
    let dir = project_dir(path);
    let dir = std::fs::canonicalize(&dir).unwrap_or_else(|_| {
        if dir.is_absolute() {
            dir
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&dir))
                .unwrap_or(dir)
        }
    });
    match path.file_name() {
        Some(name) => dir.join(name),
        None => dir,
    }
}

/// Watches the project document on a blocking task
pub struct ProjectWatcher {
    config: WatcherConfig,
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl ProjectWatcher {
    pub fn new(config: WatcherConfig) -> Self {
        Self {
            config,
            stop_tx: None,
        }
    }

    /// Start watching; changes arrive as `Message::ProjectFileChanged`
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<()> {
        if self.is_running() {
            return Err(Error::watcher("watcher is already running"));
        }

        let config = self.config.clone();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        self.stop_tx = Some(stop_tx);

        tokio::task::spawn_blocking(move || {
            Self::run_watcher(config, message_tx, stop_rx);
        });

        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    fn run_watcher(
        config: WatcherConfig,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        let tx_clone = message_tx.clone();
        let filter = config.clone();

        let debouncer_result = new_debouncer(
            config.debounce,
            None,
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    let relevant = events
                        .iter()
                        .filter(|event| event.paths.iter().any(|p| filter.is_relevant(p)))
                        .count();
                    if relevant == 0 {
                        return;
                    }
                    debug!("Project watcher saw {} change(s)", relevant);
                    let _ = tx_clone.blocking_send(Message::ProjectFileChanged);
                }
                Err(errors) => {
                    for error in errors {
                        warn!("Project watcher error: {:?}", error);
                        let _ = tx_clone.blocking_send(Message::WatcherError {
                            message: error.to_string(),
                        });
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create project watcher: {}", e);
                let _ = message_tx.blocking_send(Message::WatcherError {
                    message: format!("Failed to create watcher: {}", e),
                });
                return;
            }
        };

        for dir in config.watch_dirs() {
            match debouncer.watch(&dir, RecursiveMode::NonRecursive) {
                Ok(()) => info!("Watching: {}", dir.display()),
                Err(e) => warn!("Failed to watch {}: {}", dir.display(), e),
            }
        }

        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    info!("Project watcher stopping");
                    break;
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }
}

impl Drop for ProjectWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
