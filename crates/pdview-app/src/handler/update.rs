//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;
use tracing::{debug, info, warn};

use crate::message::{HostEvent, Message};
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_status(Local::now());
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.details.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.details.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.details.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.details.select_last();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Target sections
        // ─────────────────────────────────────────────────────────
        Message::ToggleSelected => {
            if state.details.toggle_selected().is_none() {
                debug!("Toggle ignored: no mounted section is focused");
            }
            UpdateResult::none()
        }

        Message::ExpandTarget(name) => {
            state.details.handle().expand_target(&name);
            UpdateResult::none()
        }

        Message::CollapseTarget(name) => {
            state.details.handle().collapse_target(&name);
            UpdateResult::none()
        }

        Message::ExpandAll => {
            let names = state.details.target_names().to_vec();
            let mut handle = state.details.handle();
            for name in &names {
                handle.expand_target(name);
            }
            UpdateResult::none()
        }

        Message::CollapseAll => {
            let names = state.details.target_names().to_vec();
            let mut handle = state.details.handle();
            for name in &names {
                handle.collapse_target(name);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View
        // ─────────────────────────────────────────────────────────
        Message::ToggleVariant => {
            let variant = state.details.variant().toggled();
            state.details.set_variant(variant);
            state.settings.ui.variant = variant;
            state.info(format!("Layout: {}", variant));
            UpdateResult::action(UpdateAction::SaveSettings {
                project_dir: state.project_dir(),
                settings: Box::new(state.settings.clone()),
            })
        }

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Affordances
        // ─────────────────────────────────────────────────────────
        Message::ViewInProjectGraph => {
            if !state.details.view_in_project_graph() {
                debug!("Project graph view is not available");
            }
            UpdateResult::none()
        }

        Message::ViewInTaskGraph => {
            if !state.details.view_in_task_graph_selected() {
                debug!("Task graph view is not available");
            }
            UpdateResult::none()
        }

        Message::RunSelectedTarget => {
            if !state.details.run_selected_target() {
                debug!("Run target is not available");
            }
            UpdateResult::none()
        }

        Message::Host(event) => handle_host_event(state, event),

        // ─────────────────────────────────────────────────────────
        // Project file
        // ─────────────────────────────────────────────────────────
        Message::ProjectFileChanged | Message::ReloadProject => {
            UpdateResult::action(UpdateAction::ReloadProject {
                project_path: state.project_path.clone(),
                source_map_path: state.source_map_path.clone(),
            })
        }

        Message::ProjectReloaded {
            project,
            source_map,
        } => {
            let name = project.name.clone();
            state.details.set_project(*project, source_map);
            state.info(format!(
                "Reloaded {} ({} targets)",
                name,
                state.details.target_names().len()
            ));
            UpdateResult::none()
        }

        Message::ProjectReloadFailed { error } => {
            warn!("Project reload failed: {}", error);
            state.error(format!("Reload failed: {}", error));
            UpdateResult::none()
        }

        Message::WatcherError { message } => {
            warn!("Watcher error: {}", message);
            state.warn(format!("Watcher: {}", message));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Run target
        // ─────────────────────────────────────────────────────────
        Message::RunTargetFinished { label, exit_code } => {
            state.running_targets.retain(|l| l != &label);
            match exit_code {
                Some(0) => state.info(format!("{} succeeded", label)),
                Some(code) => state.error(format!("{} exited with code {}", label, code)),
                None => state.warn(format!("{} was terminated", label)),
            }
            UpdateResult::none()
        }

        Message::RunTargetFailed { label, error } => {
            state.running_targets.retain(|l| l != &label);
            state.error(error);
            UpdateResult::none()
        }
    }
}

/// Handle a request the view raised through one of its callbacks
fn handle_host_event(state: &mut AppState, event: HostEvent) -> UpdateResult {
    match event {
        HostEvent::TargetExpanded { target_name } => {
            debug!("Target '{}' expanded by user", target_name);
            UpdateResult::none()
        }

        HostEvent::TargetCollapsed { target_name } => {
            debug!("Target '{}' collapsed by user", target_name);
            UpdateResult::none()
        }

        HostEvent::ViewInProjectGraph { project_name } => {
            info!("Project graph requested for '{}'", project_name);
            state.info(format!("Project graph: {}", project_name));
            UpdateResult::none()
        }

        HostEvent::ViewInTaskGraph {
            project_name,
            target_name,
        } => {
            info!("Task graph requested for '{}:{}'", project_name, target_name);
            state.info(format!("Task graph: {}:{}", project_name, target_name));
            UpdateResult::none()
        }

        HostEvent::RunTarget {
            project_name,
            target_name,
        } => {
            let label = format!("{}:{}", project_name, target_name);
            if state.running_targets.contains(&label) {
                state.warn(format!("{} is already running", label));
                return UpdateResult::none();
            }

            info!("Running {}", label);
            state.running_targets.push(label.clone());
            state.info(format!("Running {}...", label));
            UpdateResult::action(UpdateAction::RunTarget {
                project_name,
                target_name,
                command: state.settings.run.command.clone(),
                cwd: state.workspace_dir(),
            })
        }
    }
}
