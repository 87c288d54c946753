//! Main TUI runner - entry point and event loop

use std::path::PathBuf;
use std::time::Duration;

use pdview_app::process::process_message;
use pdview_app::{
    AppState, HostEvent, Message, ProjectDetailsCallbacks, ProjectDetailsView, ProjectWatcher,
    Settings, WatcherConfig,
};
use pdview_core::prelude::*;
use pdview_core::{Project, SourceMap};
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Terminal poll timeout; also the tick interval
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Everything the runner needs to show one project
#[derive(Debug)]
pub struct RunOptions {
    pub project_path: PathBuf,
    pub source_map_path: Option<PathBuf>,
    pub project: Project,
    pub source_map: SourceMap,
    pub settings: Settings,
    /// Reload when the project file changes (still subject to `watcher.enabled`)
    pub watch: bool,
}

/// Run the TUI until the user quits
pub async fn run(options: RunOptions) -> Result<()> {
    terminal::install_panic_hook();

    let RunOptions {
        project_path,
        source_map_path,
        project,
        source_map,
        settings,
        watch,
    } = options;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let mut details = ProjectDetailsView::new(project, source_map)
        .with_variant(settings.ui.variant)
        .with_expand_on_mount(settings.ui.expand_all_on_start)
        .with_callbacks(host_callbacks(msg_tx.clone()));
    details.mount();

    let watcher_enabled = watch && settings.watcher.enabled;
    let mut watcher_config = WatcherConfig::new(&project_path).with_settings(&settings.watcher);
    if let Some(path) = &source_map_path {
        watcher_config = watcher_config.with_file(path);
    }

    let mut state = AppState::new(project_path, settings, details)
        .with_source_map_path(source_map_path);

    let mut watcher = ProjectWatcher::new(watcher_config);
    if watcher_enabled {
        if let Err(e) = watcher.start(msg_tx.clone()) {
            warn!("Failed to start project watcher: {}", e);
            state.warn(format!("Watcher: {}", e));
        }
    } else {
        info!("Project watcher disabled");
    }

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    watcher.stop();
    state.details.unmount();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Callbacks, watcher and background actions
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(POLL_TIMEOUT)? {
            process_message(state, message, &msg_tx);
        }
    }
    Ok(())
}

/// Callbacks that forward every view request into the message channel.
///
/// They fire inside `update()`, so they only enqueue; the loop picks the
/// event up on its next pass.
pub fn host_callbacks(msg_tx: mpsc::Sender<Message>) -> ProjectDetailsCallbacks {
    let collapse_tx = msg_tx.clone();
    let expand_tx = msg_tx.clone();
    let project_graph_tx = msg_tx.clone();
    let task_graph_tx = msg_tx.clone();
    let run_tx = msg_tx;

    ProjectDetailsCallbacks::new()
        .on_target_collapse(move |target_name| {
            forward(
                &collapse_tx,
                HostEvent::TargetCollapsed {
                    target_name: target_name.to_string(),
                },
            )
        })
        .on_target_expand(move |target_name| {
            forward(
                &expand_tx,
                HostEvent::TargetExpanded {
                    target_name: target_name.to_string(),
                },
            )
        })
        .on_view_in_project_graph(move |request| {
            forward(
                &project_graph_tx,
                HostEvent::ViewInProjectGraph {
                    project_name: request.project_name,
                },
            )
        })
        .on_view_in_task_graph(move |request| {
            forward(
                &task_graph_tx,
                HostEvent::ViewInTaskGraph {
                    project_name: request.project_name,
                    target_name: request.target_name,
                },
            )
        })
        .on_run_target(move |request| {
            forward(
                &run_tx,
                HostEvent::RunTarget {
                    project_name: request.project_name,
                    target_name: request.target_name,
                },
            )
        })
}

fn forward(msg_tx: &mpsc::Sender<Message>, event: HostEvent) {
    if let Err(e) = send_host_event(msg_tx, event) {
        warn!("Dropped host event: {}", e);
    }
}

/// Enqueue a host event without blocking the update that raised it
fn send_host_event(msg_tx: &mpsc::Sender<Message>, event: HostEvent) -> Result<()> {
    msg_tx
        .try_send(Message::Host(event))
        .map_err(|e| Error::channel_send(e.to_string()))
}
