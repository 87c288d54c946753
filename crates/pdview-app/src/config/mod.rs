//! Configuration file parsing for pdview
//!
//! Supports `.pdview/config.toml` next to the project file.

pub mod settings;
pub mod types;

pub use settings::{
    config_path, load_settings, project_dir, save_settings, CONFIG_FILENAME, PDVIEW_DIR,
};
pub use types::*;
