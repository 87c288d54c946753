//! Per-target section state.
//!
//! A section is mounted into the registry cell for its target and owns the
//! expanded/collapsed flag. The owner drives it through [`TargetHandle`];
//! direct user interaction goes through [`TargetSectionState::toggle`].

use crate::registry::TargetHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSectionState {
    target_name: String,
    expanded: bool,
}

impl TargetSectionState {
    /// New section, collapsed
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            expanded: false,
        }
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the section in response to the user; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

impl TargetHandle for TargetSectionState {
    fn collapse(&mut self) {
        self.expanded = false;
    }

    fn expand(&mut self) {
        self.expanded = true;
    }
}
