//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::config::Settings;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Re-read the project (and source map) from disk
    ReloadProject {
        project_path: PathBuf,
        source_map_path: Option<PathBuf>,
    },

    /// Spawn the configured run command for a target
    RunTarget {
        project_name: String,
        target_name: String,
        /// Command template with `{project}` / `{target}` placeholders
        command: String,
        /// Working directory for the command
        cwd: PathBuf,
    },

    /// Persist settings after a preference change
    SaveSettings {
        project_dir: PathBuf,
        settings: Box<Settings>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
