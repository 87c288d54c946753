//! Application state (Model in TEA pattern)

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::{self, Settings};
use crate::project_details::ProjectDetailsView;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Severity of a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub at: DateTime<Local>,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
            at: Local::now(),
        }
    }

    /// Seconds elapsed since the message was raised
    pub fn age_secs(&self, now: DateTime<Local>) -> i64 {
        (now - self.at).num_seconds()
    }
}

/// Status messages older than this are cleared on tick
pub const STATUS_TTL_SECS: i64 = 8;

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Project document being viewed
    pub project_path: PathBuf,

    /// Optional source map document
    pub source_map_path: Option<PathBuf>,

    pub settings: Settings,

    pub details: ProjectDetailsView,

    pub status: Option<StatusMessage>,

    pub show_help: bool,

    /// `project:target` labels of run commands still in flight
    pub running_targets: Vec<String>,
}

impl AppState {
    pub fn new(project_path: PathBuf, settings: Settings, details: ProjectDetailsView) -> Self {
        Self {
            phase: AppPhase::Running,
            project_path,
            source_map_path: None,
            settings,
            details,
            status: None,
            show_help: false,
            running_targets: Vec::new(),
        }
    }

    pub fn with_source_map_path(mut self, path: Option<PathBuf>) -> Self {
        self.source_map_path = path;
        self
    }

    /// Directory holding the project document (and `.pdview/`)
    pub fn project_dir(&self) -> PathBuf {
        config::project_dir(&self.project_path)
    }

    /// Workspace root: the project directory with the project's relative
    /// `root` stripped from its end, or the project directory itself.
    pub fn workspace_dir(&self) -> PathBuf {
        let dir = self.project_dir();
        let root = Path::new(&self.details.project().data.root);
        if root.as_os_str().is_empty() || root.is_absolute() || !dir.ends_with(root) {
            return dir;
        }
        match dir.ancestors().nth(root.components().count()) {
            Some(ws) if !ws.as_os_str().is_empty() => ws.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(level, text));
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(StatusLevel::Info, text);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.set_status(StatusLevel::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(StatusLevel::Error, text);
    }

    /// Drop the status message once it has been visible long enough
    pub fn expire_status(&mut self, now: DateTime<Local>) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.age_secs(now) >= STATUS_TTL_SECS)
        {
            self.status = None;
        }
    }
}
