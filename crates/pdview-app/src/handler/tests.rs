use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Local};
use pdview_core::{Project, SourceMap};

use super::*;
use crate::callbacks::ProjectDetailsCallbacks;
use crate::config::Variant;
use crate::input_key::InputKey;
use crate::message::HostEvent;
use crate::project_details::ProjectDetailsView;
use crate::state::{AppState, StatusLevel, StatusMessage};

fn project(name: &str, targets: &[&str]) -> Project {
    let targets: serde_json::Map<String, serde_json::Value> = targets
        .iter()
        .map(|t| (t.to_string(), serde_json::json!({ "executor": "nx:run-commands" })))
        .collect();
    let json = serde_json::json!({
        "name": name,
        "data": { "root": "apps/app1", "projectType": "application", "targets": targets }
    });
    Project::from_json_str(&json.to_string(), ".").unwrap()
}

fn test_state() -> AppState {
    let mut details = ProjectDetailsView::new(project("app1", &["build", "serve", "test"]), SourceMap::new());
    details.mount();
    AppState::new(
        PathBuf::from("/repo/apps/app1/project.json"),
        Settings::default(),
        details,
    )
}

/// State whose callbacks push host events into a shared log, the same
/// way the runner forwards them into the message channel
fn wired_state(log: &Arc<Mutex<Vec<HostEvent>>>) -> AppState {
    let project_graph = log.clone();
    let run = log.clone();
    let expand = log.clone();
    let callbacks = ProjectDetailsCallbacks::new()
        .on_target_expand(move |name| {
            expand.lock().unwrap().push(HostEvent::TargetExpanded {
                target_name: name.to_string(),
            })
        })
        .on_view_in_project_graph(move |req| {
            project_graph
                .lock()
                .unwrap()
                .push(HostEvent::ViewInProjectGraph {
                    project_name: req.project_name,
                })
        })
        .on_run_target(move |req| {
            run.lock().unwrap().push(HostEvent::RunTarget {
                project_name: req.project_name,
                target_name: req.target_name,
            })
        });

    let mut state = test_state();
    let details = ProjectDetailsView::new(project("app1", &["build", "serve", "test"]), SourceMap::new())
        .with_callbacks(callbacks);
    state.details = details;
    state.details.mount();
    state
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_key_mapping() {
    let state = test_state();
    assert!(matches!(handle_key_msg(&state, InputKey::Char('q')), Some(Message::Quit)));
    assert!(matches!(handle_key_msg(&state, InputKey::CharCtrl('c')), Some(Message::Quit)));
    assert!(matches!(handle_key_msg(&state, InputKey::Down), Some(Message::SelectNext)));
    assert!(matches!(handle_key_msg(&state, InputKey::Char('k')), Some(Message::SelectPrevious)));
    assert!(matches!(handle_key_msg(&state, InputKey::Enter), Some(Message::ToggleSelected)));
    assert!(matches!(handle_key_msg(&state, InputKey::Char('e')), Some(Message::ExpandAll)));
    assert!(matches!(handle_key_msg(&state, InputKey::Char('v')), Some(Message::ToggleVariant)));
    assert!(matches!(handle_key_msg(&state, InputKey::Char('r')), Some(Message::RunSelectedTarget)));
    assert!(matches!(handle_key_msg(&state, InputKey::F(5)), Some(Message::ReloadProject)));
    assert!(handle_key_msg(&state, InputKey::Char('z')).is_none());
}

#[test]
fn test_help_popup_captures_keys() {
    let mut state = test_state();
    state.show_help = true;
    assert!(matches!(handle_key_msg(&state, InputKey::Esc), Some(Message::ToggleHelp)));
    assert!(matches!(handle_key_msg(&state, InputKey::Char('?')), Some(Message::ToggleHelp)));
    assert!(matches!(handle_key_msg(&state, InputKey::CharCtrl('c')), Some(Message::Quit)));
    assert!(handle_key_msg(&state, InputKey::Enter).is_none());
    assert!(handle_key_msg(&state, InputKey::Char('j')).is_none());
}

fn handle_key_msg(state: &AppState, key: InputKey) -> Option<Message> {
    keys::handle_key(state, key)
}

#[test]
fn test_key_message_follows_up() {
    let mut state = test_state();
    let result = update(&mut state, Message::Key(InputKey::Char('j')));
    assert!(matches!(result.message, Some(Message::SelectNext)));
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigation_and_toggle() {
    let mut state = test_state();
    update(&mut state, Message::SelectLast);
    assert_eq!(state.details.selected_target(), Some("test"));

    update(&mut state, Message::ToggleSelected);
    assert!(state.details.is_target_expanded("test"));
    assert!(!state.details.is_target_expanded("build"));

    update(&mut state, Message::SelectFirst);
    update(&mut state, Message::SelectNext);
    assert_eq!(state.details.selected_target(), Some("serve"));
}

#[test]
fn test_expand_and_collapse_by_name() {
    let mut state = test_state();
    update(&mut state, Message::ExpandTarget("serve".to_string()));
    assert!(state.details.is_target_expanded("serve"));

    update(&mut state, Message::CollapseTarget("serve".to_string()));
    assert!(!state.details.is_target_expanded("serve"));

    // Unknown names are ignored
    update(&mut state, Message::ExpandTarget("lint".to_string()));
    assert!(!state.details.is_target_expanded("lint"));
}

#[test]
fn test_expand_all_then_collapse_all() {
    let mut state = test_state();
    update(&mut state, Message::ExpandAll);
    for name in ["build", "serve", "test"] {
        assert!(state.details.is_target_expanded(name), "{name} should be expanded");
    }

    update(&mut state, Message::CollapseAll);
    for name in ["build", "serve", "test"] {
        assert!(!state.details.is_target_expanded(name), "{name} should be collapsed");
    }
}

#[test]
fn test_expand_all_does_not_fire_callbacks() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut state = wired_state(&log);
    update(&mut state, Message::ExpandAll);
    assert!(log.lock().unwrap().is_empty());

    update(&mut state, Message::CollapseAll);
    update(&mut state, Message::ToggleSelected);
    assert_eq!(
        *log.lock().unwrap(),
        vec![HostEvent::TargetExpanded {
            target_name: "build".to_string()
        }]
    );
}

// ─────────────────────────────────────────────────────────
// View
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_variant_saves_settings() {
    let mut state = test_state();
    state.details.handle().expand_target("build");

    let result = update(&mut state, Message::ToggleVariant);

    assert_eq!(state.details.variant(), Variant::Compact);
    assert_eq!(state.settings.ui.variant, Variant::Compact);
    assert!(state.details.is_target_expanded("build"));
    match result.action {
        Some(UpdateAction::SaveSettings {
            project_dir,
            settings,
        }) => {
            assert_eq!(project_dir, PathBuf::from("/repo/apps/app1"));
            assert_eq!(settings.ui.variant, Variant::Compact);
        }
        other => panic!("expected SaveSettings, got {:?}", other),
    }

    update(&mut state, Message::ToggleVariant);
    assert_eq!(state.details.variant(), Variant::Default);
}

#[test]
fn test_toggle_help() {
    let mut state = test_state();
    update(&mut state, Message::ToggleHelp);
    assert!(state.show_help);
    update(&mut state, Message::ToggleHelp);
    assert!(!state.show_help);
}

#[test]
fn test_quit() {
    let mut state = test_state();
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_tick_expires_old_status() {
    let mut state = test_state();
    state.status = Some(StatusMessage {
        text: "old".to_string(),
        level: StatusLevel::Info,
        at: Local::now() - Duration::seconds(60),
    });
    update(&mut state, Message::Tick);
    assert!(state.status.is_none());

    state.info("fresh");
    update(&mut state, Message::Tick);
    assert!(state.status.is_some());
}

// ─────────────────────────────────────────────────────────
// Affordances
// ─────────────────────────────────────────────────────────

#[test]
fn test_affordances_without_callbacks_are_noops() {
    let mut state = test_state();
    assert!(update(&mut state, Message::ViewInProjectGraph).action.is_none());
    assert!(update(&mut state, Message::ViewInTaskGraph).action.is_none());
    assert!(update(&mut state, Message::RunSelectedTarget).action.is_none());
    assert!(state.status.is_none());
}

#[test]
fn test_affordances_invoke_callbacks() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut state = wired_state(&log);
    update(&mut state, Message::SelectNext);
    update(&mut state, Message::ViewInProjectGraph);
    update(&mut state, Message::RunSelectedTarget);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            HostEvent::ViewInProjectGraph {
                project_name: "app1".to_string()
            },
            HostEvent::RunTarget {
                project_name: "app1".to_string(),
                target_name: "serve".to_string()
            },
        ]
    );
}

#[test]
fn test_host_run_target_returns_action() {
    let mut state = test_state();
    let result = update(
        &mut state,
        Message::Host(HostEvent::RunTarget {
            project_name: "app1".to_string(),
            target_name: "build".to_string(),
        }),
    );

    match result.action {
        Some(UpdateAction::RunTarget {
            project_name,
            target_name,
            command,
            cwd,
        }) => {
            assert_eq!(project_name, "app1");
            assert_eq!(target_name, "build");
            assert_eq!(command, "nx run {project}:{target}");
            assert_eq!(cwd, PathBuf::from("/repo"));
        }
        other => panic!("expected RunTarget, got {:?}", other),
    }
    assert_eq!(state.running_targets, vec!["app1:build".to_string()]);
}

#[test]
fn test_host_run_target_rejects_duplicates() {
    let mut state = test_state();
    let event = HostEvent::RunTarget {
        project_name: "app1".to_string(),
        target_name: "build".to_string(),
    };
    update(&mut state, Message::Host(event.clone()));
    let result = update(&mut state, Message::Host(event));

    assert!(result.action.is_none());
    assert_eq!(state.running_targets.len(), 1);
    let status = state.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Warning);
    assert!(status.text.contains("already running"));
}

#[test]
fn test_run_target_finished_clears_running() {
    let mut state = test_state();
    state.running_targets.push("app1:build".to_string());

    update(
        &mut state,
        Message::RunTargetFinished {
            label: "app1:build".to_string(),
            exit_code: Some(1),
        },
    );

    assert!(state.running_targets.is_empty());
    let status = state.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert_eq!(status.text, "app1:build exited with code 1");
}

#[test]
fn test_run_target_failed_reports_error() {
    let mut state = test_state();
    state.running_targets.push("app1:build".to_string());
    update(
        &mut state,
        Message::RunTargetFailed {
            label: "app1:build".to_string(),
            error: "Failed to run target app1:build: nx not found".to_string(),
        },
    );
    assert!(state.running_targets.is_empty());
    assert_eq!(
        state.status.as_ref().unwrap().text,
        "Failed to run target app1:build: nx not found"
    );
}

#[test]
fn test_graph_requests_post_status() {
    let mut state = test_state();
    update(
        &mut state,
        Message::Host(HostEvent::ViewInTaskGraph {
            project_name: "app1".to_string(),
            target_name: "test".to_string(),
        }),
    );
    assert_eq!(state.status.as_ref().unwrap().text, "Task graph: app1:test");
}

// ─────────────────────────────────────────────────────────
// Project file
// ─────────────────────────────────────────────────────────

#[test]
fn test_file_change_requests_reload() {
    let mut state = test_state().with_source_map_path(Some(PathBuf::from("/repo/map.json")));
    let result = update(&mut state, Message::ProjectFileChanged);
    match result.action {
        Some(UpdateAction::ReloadProject {
            project_path,
            source_map_path,
        }) => {
            assert_eq!(project_path, PathBuf::from("/repo/apps/app1/project.json"));
            assert_eq!(source_map_path, Some(PathBuf::from("/repo/map.json")));
        }
        other => panic!("expected ReloadProject, got {:?}", other),
    }
}

#[test]
fn test_project_reloaded_keeps_expanded_sections() {
    let mut state = test_state();
    update(&mut state, Message::ExpandTarget("serve".to_string()));
    update(&mut state, Message::SelectLast);

    update(
        &mut state,
        Message::ProjectReloaded {
            project: Box::new(project("app1", &["lint", "serve", "test"])),
            source_map: SourceMap::new(),
        },
    );

    assert_eq!(state.details.target_names(), &["lint", "serve", "test"]);
    assert!(state.details.is_target_expanded("serve"));
    assert!(!state.details.is_target_expanded("lint"));
    assert_eq!(state.details.selected_target(), Some("test"));
    assert_eq!(
        state.status.as_ref().unwrap().text,
        "Reloaded app1 (3 targets)"
    );
}

#[test]
fn test_project_reload_failed_sets_error() {
    let mut state = test_state();
    update(
        &mut state,
        Message::ProjectReloadFailed {
            error: "bad json".to_string(),
        },
    );
    let status = state.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("bad json"));
}

#[test]
fn test_watcher_error_sets_warning() {
    let mut state = test_state();
    update(
        &mut state,
        Message::WatcherError {
            message: "inotify limit".to_string(),
        },
    );
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Warning);
}

// ─────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────

#[test]
fn test_workspace_dir_strips_project_root() {
    let state = test_state();
    assert_eq!(state.project_dir(), PathBuf::from("/repo/apps/app1"));
    assert_eq!(state.workspace_dir(), PathBuf::from("/repo"));
}

#[test]
fn test_workspace_dir_falls_back_to_project_dir() {
    let mut state = test_state();
    state.project_path = PathBuf::from("/elsewhere/project.json");
    assert_eq!(state.workspace_dir(), PathBuf::from("/elsewhere"));
}
