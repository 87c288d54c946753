//! pdview - A terminal viewer for project configuration and targets
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use pdview_app::config::{load_settings, project_dir, Variant};
use pdview_core::prelude::*;
use pdview_core::{load_project, load_source_map, logging, SourceMap};
use pdview_tui::RunOptions;

/// pdview - Show a project's root, type, tags and targets
#[derive(Parser, Debug)]
#[command(name = "pdview")]
#[command(about = "A terminal viewer for project configuration and targets", long_about = None)]
struct Args {
    /// Project file: a project graph node or a project.json
    #[arg(value_name = "PROJECT_FILE")]
    project: PathBuf,

    /// Source map file (`{ "targets.build": ["project.json"] }`)
    #[arg(long, value_name = "FILE")]
    source_map: Option<PathBuf>,

    /// Use the compact layout regardless of the settings file
    #[arg(long)]
    compact: bool,

    /// Do not reload when the project file changes
    #[arg(long)]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    logging::init()?;

    info!("Project file: {}", args.project.display());

    let result = run(args).await;

    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Fatal error, exiting: {}", e);
        } else {
            error!("Application error: {:?}", e);
        }
    }

    info!("pdview exiting");
    result
}

async fn run(args: Args) -> Result<()> {
    let project = load_project(&args.project).context("Loading project file")?;

    let source_map = match &args.source_map {
        Some(path) => load_source_map(path)
            .with_context(|| format!("Loading source map {}", path.display()))
            .or_else(|e| {
                if e.is_recoverable() {
                    warn!("Showing targets without provenance: {}", e);
                    Ok(SourceMap::new())
                } else {
                    Err(e)
                }
            })?,
        None => SourceMap::new(),
    };

    let mut settings = load_settings(&project_dir(&args.project));
    if args.compact {
        settings.ui.variant = Variant::Compact;
    }

    pdview_tui::run(RunOptions {
        project_path: args.project,
        source_map_path: args.source_map,
        project,
        source_map,
        settings,
        watch: !args.no_watch,
    })
    .await
}
