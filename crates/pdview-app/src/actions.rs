//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::PathBuf;
use std::process::Stdio;

use pdview_core::{load_project, load_source_map, Error, SourceMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::save_settings;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::ReloadProject {
            project_path,
            source_map_path,
        } => {
            tokio::spawn(async move {
                let loaded = tokio::task::spawn_blocking(move || {
                    reload_project(project_path, source_map_path)
                })
                .await;

                let msg = match loaded {
                    Ok(msg) => msg,
                    Err(e) => Message::ProjectReloadFailed {
                        error: format!("reload task failed: {}", e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::RunTarget {
            project_name,
            target_name,
            command,
            cwd,
        } => {
            tokio::spawn(async move {
                let label = format!("{}:{}", project_name, target_name);
                let msg = run_target(&command, &project_name, &target_name, cwd, label).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SaveSettings {
            project_dir,
            settings,
        } => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = save_settings(&project_dir, &settings) {
                    warn!("Failed to save settings: {}", e);
                }
            });
        }
    }
}

/// Load the project and source map, producing the resulting message
fn reload_project(project_path: PathBuf, source_map_path: Option<PathBuf>) -> Message {
    let project = match load_project(&project_path) {
        Ok(project) => project,
        Err(e) => {
            return Message::ProjectReloadFailed {
                error: e.to_string(),
            }
        }
    };

    let source_map = match source_map_path {
        Some(path) => match load_source_map(&path) {
            Ok(map) => map,
            Err(e) => {
                warn!("Keeping project reload without source map: {}", e);
                SourceMap::new()
            }
        },
        None => SourceMap::new(),
    };

    Message::ProjectReloaded {
        project: Box::new(project),
        source_map,
    }
}

/// Expand a run command template into program and arguments
pub fn build_run_command(
    template: &str,
    project_name: &str,
    target_name: &str,
) -> Option<(String, Vec<String>)> {
    let mut parts = template.split_whitespace().map(|part| {
        part.replace("{project}", project_name)
            .replace("{target}", target_name)
    });
    let program = parts.next()?;
    Some((program, parts.collect()))
}

async fn run_target(
    template: &str,
    project_name: &str,
    target_name: &str,
    cwd: PathBuf,
    label: String,
) -> Message {
    let Some((program, args)) = build_run_command(template, project_name, target_name) else {
        return run_failed(label, "run command is empty");
    };

    let resolved = match which::which(&program) {
        Ok(path) => path,
        Err(e) => return run_failed(label, format!("{} not found: {}", program, e)),
    };

    debug!(
        "Spawning {} {:?} in {}",
        resolved.display(),
        args,
        cwd.display()
    );

    let status = tokio::process::Command::new(&resolved)
        .args(&args)
        .current_dir(&cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) => {
            info!("{} finished with {}", label, status);
            Message::RunTargetFinished {
                label,
                exit_code: status.code(),
            }
        }
        Err(e) => run_failed(label, e.to_string()),
    }
}

fn run_failed(label: String, reason: impl Into<String>) -> Message {
    let error = Error::run_target(label.as_str(), reason);
    warn!("{}", error);
    Message::RunTargetFailed {
        label,
        error: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_run_command_substitutes_placeholders() {
        let (program, args) =
            build_run_command("nx run {project}:{target}", "app1", "build").unwrap();
        assert_eq!(program, "nx");
        assert_eq!(args, vec!["run", "app1:build"]);
    }

    #[test]
    fn test_build_run_command_with_extra_args() {
        let (program, args) = build_run_command(
            "pnpm exec nx run {project}:{target} --skip-nx-cache",
            "lib1",
            "test",
        )
        .unwrap();
        assert_eq!(program, "pnpm");
        assert_eq!(args, vec!["exec", "nx", "run", "lib1:test", "--skip-nx-cache"]);
    }

    #[test]
    fn test_build_run_command_empty_template() {
        assert!(build_run_command("   ", "app1", "build").is_none());
    }

    #[test]
    fn test_reload_project_missing_file() {
        let temp = tempdir().unwrap();
        let msg = reload_project(temp.path().join("project.json"), None);
        assert!(matches!(msg, Message::ProjectReloadFailed { .. }));
    }

    #[test]
    fn test_reload_project_with_bad_source_map_keeps_project() {
        let temp = tempdir().unwrap();
        let project_path = temp.path().join("project.json");
        let source_map_path = temp.path().join("source-map.json");
        std::fs::write(&project_path, r#"{ "name": "app1", "targets": { "build": {} } }"#)
            .unwrap();
        std::fs::write(&source_map_path, "[]").unwrap();

        match reload_project(project_path, Some(source_map_path)) {
            Message::ProjectReloaded {
                project,
                source_map,
            } => {
                assert_eq!(project.name, "app1");
                assert!(source_map.is_empty());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_target_missing_program() {
        let temp = tempdir().unwrap();
        let msg = run_target(
            "pdview-definitely-not-installed {project}",
            "app1",
            "build",
            temp.path().to_path_buf(),
            "app1:build".to_string(),
        )
        .await;

        match msg {
            Message::RunTargetFailed { label, error } => {
                assert_eq!(label, "app1:build");
                assert!(error.starts_with("Failed to run target app1:build: "));
                assert!(error.contains("pdview-definitely-not-installed not found"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_target_empty_template() {
        let temp = tempdir().unwrap();
        let msg = run_target(
            "   ",
            "app1",
            "build",
            temp.path().to_path_buf(),
            "app1:build".to_string(),
        )
        .await;

        match msg {
            Message::RunTargetFailed { error, .. } => {
                assert_eq!(error, "Failed to run target app1:build: run command is empty");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reload_action_sends_message() {
        let temp = tempdir().unwrap();
        let project_path = temp.path().join("project.json");
        std::fs::write(&project_path, r#"{ "name": "app9" }"#).unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::ReloadProject {
                project_path,
                source_map_path: None,
            },
            tx,
        );

        match rx.recv().await {
            Some(Message::ProjectReloaded { project, .. }) => assert_eq!(project.name, "app9"),
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
