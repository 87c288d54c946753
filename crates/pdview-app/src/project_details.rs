//! Project details view state.
//!
//! [`ProjectDetailsView`] owns the project input, the derived target-name
//! enumeration and the [`TargetHandleRegistry`] of mounted target sections.
//! A parent drives sections by name through [`ProjectDetailsView::handle`];
//! the renderer reads everything else through accessors.

use pdview_core::{Project, SourceMap, TargetConfiguration};
use tracing::{debug, info};

use crate::callbacks::{Affordances, ProjectDetailsCallbacks, ProjectGraphRequest, TargetRequest};
use crate::config::Variant;
use crate::registry::{HandleCell, ProjectDetailsHandle, TargetHandleRegistry};
use crate::target_section::TargetSectionState;

pub struct ProjectDetailsView {
    project: Project,
    source_map: SourceMap,
    variant: Variant,
    callbacks: ProjectDetailsCallbacks,
    registry: TargetHandleRegistry<TargetSectionState>,
    /// Sections start expanded when mounted
    expand_on_mount: bool,
    mounted: bool,
    /// Index into `target_names()` of the focused section
    selected: usize,
}

impl std::fmt::Debug for ProjectDetailsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectDetailsView")
            .field("project", &self.project.name)
            .field("variant", &self.variant)
            .field("targets", &self.registry.names())
            .field("mounted", &self.mounted)
            .field("selected", &self.selected)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

impl ProjectDetailsView {
    /// Build the view and its registry. Sections are not mounted yet.
    pub fn new(project: Project, source_map: SourceMap) -> Self {
        let registry = TargetHandleRegistry::new(project.data.target_names());
        debug!(
            "Created project details for '{}' with {} target(s)",
            project.name,
            registry.len()
        );
        Self {
            project,
            source_map,
            variant: Variant::Default,
            callbacks: ProjectDetailsCallbacks::default(),
            registry,
            expand_on_mount: false,
            mounted: false,
            selected: 0,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_callbacks(mut self, callbacks: ProjectDetailsCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn with_expand_on_mount(mut self, expand: bool) -> Self {
        self.expand_on_mount = expand;
        self
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Mount a section into every empty cell
    pub fn mount(&mut self) {
        self.mounted = true;
        let names: Vec<String> = self.registry.names().to_vec();
        for name in names {
            let needs_section = self
                .registry
                .get(&name)
                .map(|cell| !cell.is_mounted())
                .unwrap_or(false);
            if needs_section {
                let section = TargetSectionState::new(name.as_str())
                    .with_expanded(self.expand_on_mount);
                self.registry.mount(&name, section);
            }
        }
    }

    /// Clear every cell; the registered names stay
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.registry.unmount_all();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replace the project input.
    ///
    /// The registry is reconciled rather than rebuilt: sections of targets
    /// that still exist keep their state, removed targets are dropped and new
    /// targets are mounted (if the view is mounted).
    pub fn set_project(&mut self, project: Project, source_map: SourceMap) {
        let selected_name = self.selected_target().map(str::to_string);

        self.project = project;
        self.source_map = source_map;
        self.registry.reconcile(self.project.data.target_names());

        self.selected = selected_name
            .and_then(|name| self.registry.names().iter().position(|n| *n == name))
            .unwrap_or(0)
            .min(self.registry.len().saturating_sub(1));

        if self.mounted {
            self.mount();
        }
        info!(
            "Project '{}' updated: {} target(s)",
            self.project.name,
            self.registry.len()
        );
    }

    /// Change the density. Sections and registry are untouched.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    // ─────────────────────────────────────────────────────────
    // Imperative surface
    // ─────────────────────────────────────────────────────────

    /// Handle for expanding/collapsing targets by name
    pub fn handle(&mut self) -> ProjectDetailsHandle<'_, TargetSectionState> {
        ProjectDetailsHandle::new(&mut self.registry)
    }

    // ─────────────────────────────────────────────────────────
    // Derived data
    // ─────────────────────────────────────────────────────────

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Target names in the order the project declares them
    pub fn target_names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn target(&self, name: &str) -> Option<&TargetConfiguration> {
        self.project.data.target(name)
    }

    /// Capitalized project type, `None` when the project has none
    pub fn display_type(&self) -> Option<String> {
        self.project.data.display_type()
    }

    pub fn affordances(&self) -> Affordances {
        self.callbacks.affordances()
    }

    /// Mounted section for `name`
    pub fn section(&self, name: &str) -> Option<&TargetSectionState> {
        self.registry.get(name).and_then(HandleCell::get)
    }

    pub fn is_target_expanded(&self, name: &str) -> bool {
        self.section(name)
            .map(TargetSectionState::is_expanded)
            .unwrap_or(false)
    }

    pub fn registry(&self) -> &TargetHandleRegistry<TargetSectionState> {
        &self.registry
    }

    // ─────────────────────────────────────────────────────────
    // Selection & user interaction
    // ─────────────────────────────────────────────────────────

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_target(&self) -> Option<&str> {
        self.registry.names().get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.registry.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.registry.len().saturating_sub(1);
    }

    /// Select a target by name; unknown names leave the selection alone
    pub fn select_target(&mut self, name: &str) -> bool {
        match self.registry.names().iter().position(|n| n == name) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// User toggled the focused section through its own header.
    ///
    /// Fires `on_target_expand` / `on_target_collapse`. Returns the new
    /// expanded state, or `None` when nothing is focused or mounted.
    pub fn toggle_selected(&mut self) -> Option<bool> {
        let name = self.selected_target()?.to_string();
        let expanded = self
            .registry
            .get_mut(&name)
            .and_then(HandleCell::get_mut)?
            .toggle();

        if expanded {
            if let Some(callback) = self.callbacks.on_target_expand.as_mut() {
                callback(&name);
            }
        } else if let Some(callback) = self.callbacks.on_target_collapse.as_mut() {
            callback(&name);
        }
        Some(expanded)
    }

    /// Returns `false` when the host supplied no project graph callback
    pub fn view_in_project_graph(&mut self) -> bool {
        let project_name = self.project.name.clone();
        match self.callbacks.on_view_in_project_graph.as_mut() {
            Some(callback) => {
                callback(ProjectGraphRequest { project_name });
                true
            }
            None => false,
        }
    }

    /// Returns `false` when the host supplied no task graph callback or no
    /// target is focused
    pub fn view_in_task_graph_selected(&mut self) -> bool {
        let Some(request) = self.selected_request() else {
            return false;
        };
        match self.callbacks.on_view_in_task_graph.as_mut() {
            Some(callback) => {
                callback(request);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when the host supplied no run callback or no target is
    /// focused
    pub fn run_selected_target(&mut self) -> bool {
        let Some(request) = self.selected_request() else {
            return false;
        };
        match self.callbacks.on_run_target.as_mut() {
            Some(callback) => {
                callback(request);
                true
            }
            None => false,
        }
    }

    fn selected_request(&self) -> Option<TargetRequest> {
        self.selected_target().map(|target_name| TargetRequest {
            project_name: self.project.name.clone(),
            target_name: target_name.to_string(),
        })
    }
}
