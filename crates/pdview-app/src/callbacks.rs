//! Optional host callbacks for the project details view.
//!
//! Each callback doubles as a feature gate: when it is absent the matching
//! affordance is neither rendered nor reachable from the keyboard.

use std::fmt;

/// Payload of a "view in project graph" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGraphRequest {
    pub project_name: String,
}

/// Payload of "view in task graph" and "run target" requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRequest {
    pub project_name: String,
    pub target_name: String,
}

pub type TargetNameCallback = Box<dyn FnMut(&str) + Send>;
pub type ProjectGraphCallback = Box<dyn FnMut(ProjectGraphRequest) + Send>;
pub type TargetRequestCallback = Box<dyn FnMut(TargetRequest) + Send>;

#[derive(Default)]
pub struct ProjectDetailsCallbacks {
    /// User collapsed a section through its own UI
    pub on_target_collapse: Option<TargetNameCallback>,
    /// User expanded a section through its own UI
    pub on_target_expand: Option<TargetNameCallback>,
    pub on_view_in_project_graph: Option<ProjectGraphCallback>,
    pub on_view_in_task_graph: Option<TargetRequestCallback>,
    pub on_run_target: Option<TargetRequestCallback>,
}

impl ProjectDetailsCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_target_collapse(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_target_collapse = Some(Box::new(f));
        self
    }

    pub fn on_target_expand(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_target_expand = Some(Box::new(f));
        self
    }

    pub fn on_view_in_project_graph(
        mut self,
        f: impl FnMut(ProjectGraphRequest) + Send + 'static,
    ) -> Self {
        self.on_view_in_project_graph = Some(Box::new(f));
        self
    }

    pub fn on_view_in_task_graph(mut self, f: impl FnMut(TargetRequest) + Send + 'static) -> Self {
        self.on_view_in_task_graph = Some(Box::new(f));
        self
    }

    pub fn on_run_target(mut self, f: impl FnMut(TargetRequest) + Send + 'static) -> Self {
        self.on_run_target = Some(Box::new(f));
        self
    }

    /// Which affordances the renderer should show
    pub fn affordances(&self) -> Affordances {
        Affordances {
            project_graph: self.on_view_in_project_graph.is_some(),
            task_graph: self.on_view_in_task_graph.is_some(),
            run_target: self.on_run_target.is_some(),
        }
    }
}

impl fmt::Debug for ProjectDetailsCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectDetailsCallbacks")
            .field("on_target_collapse", &self.on_target_collapse.is_some())
            .field("on_target_expand", &self.on_target_expand.is_some())
            .field(
                "on_view_in_project_graph",
                &self.on_view_in_project_graph.is_some(),
            )
            .field("on_view_in_task_graph", &self.on_view_in_task_graph.is_some())
            .field("on_run_target", &self.on_run_target.is_some())
            .finish()
    }
}

/// Presence flags for the navigation/run affordances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affordances {
    pub project_graph: bool,
    pub task_graph: bool,
    pub run_target: bool,
}
