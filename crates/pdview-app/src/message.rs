//! Message types for the application (TEA pattern)

use pdview_core::{Project, SourceMap};

use crate::input_key::InputKey;

/// Requests raised by the project details view through its callbacks.
///
/// The host wires every callback to push one of these into the message
/// channel, so they are handled on the next loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    TargetExpanded {
        target_name: String,
    },
    TargetCollapsed {
        target_name: String,
    },
    ViewInProjectGraph {
        project_name: String,
    },
    ViewInTaskGraph {
        project_name: String,
        target_name: String,
    },
    RunTarget {
        project_name: String,
        target_name: String,
    },
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Target sections
    // ─────────────────────────────────────────────────────────
    /// User toggled the focused section
    ToggleSelected,
    /// Expand a section by name through the imperative handle
    ExpandTarget(String),
    /// Collapse a section by name through the imperative handle
    CollapseTarget(String),
    ExpandAll,
    CollapseAll,

    // ─────────────────────────────────────────────────────────
    // View
    // ─────────────────────────────────────────────────────────
    ToggleVariant,
    ToggleHelp,

    // ─────────────────────────────────────────────────────────
    // Affordances (gated on host callbacks)
    // ─────────────────────────────────────────────────────────
    ViewInProjectGraph,
    ViewInTaskGraph,
    RunSelectedTarget,

    /// A view callback fired
    Host(HostEvent),

    // ─────────────────────────────────────────────────────────
    // Project file
    // ─────────────────────────────────────────────────────────
    /// Project or source map file changed on disk (debounced)
    ProjectFileChanged,
    /// Manual reload requested
    ReloadProject,
    ProjectReloaded {
        project: Box<Project>,
        source_map: SourceMap,
    },
    ProjectReloadFailed {
        error: String,
    },
    WatcherError {
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Run target
    // ─────────────────────────────────────────────────────────
    RunTargetFinished {
        label: String,
        exit_code: Option<i32>,
    },
    RunTargetFailed {
        label: String,
        error: String,
    },
}
