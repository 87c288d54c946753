//! Settings loading from `.pdview/config.toml`

use std::path::{Path, PathBuf};

use pdview_core::prelude::*;

use super::types::Settings;

/// Directory holding pdview configuration, next to the project file
pub const PDVIEW_DIR: &str = ".pdview";

/// Settings file name inside [`PDVIEW_DIR`]
pub const CONFIG_FILENAME: &str = "config.toml";

/// Path of the settings file for a project directory
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PDVIEW_DIR).join(CONFIG_FILENAME)
}

/// Directory holding a project file, `.` for a bare file name
pub fn project_dir(project_path: &Path) -> PathBuf {
    project_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load settings from .pdview/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_dir: &Path) -> Settings {
    let config_path = config_path(project_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write settings to .pdview/config.toml, creating the directory if needed
pub fn save_settings(project_dir: &Path, settings: &Settings) -> Result<()> {
    let path = config_path(project_dir);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(&path, content)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("Saved settings to {}", path.display());
    Ok(())
}
