//! Configuration types for pdview
//!
//! Defines:
//! - `Settings` - Application settings (`.pdview/config.toml`)
//! - `Variant` - Presentational density of the project details view
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

/// Application settings (.pdview/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub watcher: WatcherSettings,

    #[serde(default)]
    pub run: RunSettings,
}

/// Density of the project details view. Affects spacing only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Compact,
}

impl Variant {
    pub fn is_compact(&self) -> bool {
        matches!(self, Variant::Compact)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Variant::Default => Variant::Compact,
            Variant::Compact => Variant::Default,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Default => write!(f, "default"),
            Variant::Compact => write!(f, "compact"),
        }
    }
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default, works in all
/// terminals) or Nerd Font glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub icons: IconMode,

    /// Start with every target section expanded
    #[serde(default)]
    pub expand_all_on_start: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            icons: IconMode::Unicode,
            expand_all_on_start: false,
        }
    }
}

/// Project file watcher settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WatcherSettings {
    /// Reload the view when the project or source map file changes
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Debounce duration in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Run-target settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunSettings {
    /// Command template; `{project}` and `{target}` are substituted
    #[serde(default = "default_run_command")]
    pub command: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            command: default_run_command(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_run_command() -> String {
    "nx run {project}:{target}".to_string()
}
