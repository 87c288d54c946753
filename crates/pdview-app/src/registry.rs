//! Target handle registry and the imperative dispatch handle.
//!
//! The registry maps every target name of the current project to a
//! [`HandleCell`]. A cell starts empty and holds the target section's
//! control surface once that section has mounted. The registry is built once
//! for a view and reconciled in place when the set of target names changes,
//! so cells for targets that persist keep their mounted handle.

use std::collections::HashMap;

use tracing::{debug, trace};

/// Control surface a mounted target section exposes to its owner
#[cfg_attr(test, mockall::automock)]
pub trait TargetHandle {
    /// Collapse the section (no-op if already collapsed)
    fn collapse(&mut self);

    /// Expand the section (no-op if already expanded)
    fn expand(&mut self);
}

/// Slot for one target's handle. Empty until the section mounts.
#[derive(Debug)]
pub struct HandleCell<H> {
    handle: Option<H>,
}

impl<H> Default for HandleCell<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> HandleCell<H> {
    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn get(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut H> {
        self.handle.as_mut()
    }

    fn set(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    fn take(&mut self) -> Option<H> {
        self.handle.take()
    }
}

/// Target name → handle cell, iterated in target declaration order
#[derive(Debug)]
pub struct TargetHandleRegistry<H> {
    order: Vec<String>,
    cells: HashMap<String, HandleCell<H>>,
}

impl<H> Default for TargetHandleRegistry<H> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            cells: HashMap::new(),
        }
    }
}

impl<H> TargetHandleRegistry<H> {
    /// Build one empty cell per target name, keeping the given order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for name in names {
            let name = name.into();
            if registry.cells.contains_key(&name) {
                continue;
            }
            registry.cells.insert(name.clone(), HandleCell::default());
            registry.order.push(name);
        }
        registry
    }

    /// Registered target names in declaration order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&HandleCell<H>> {
        self.cells.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut HandleCell<H>> {
        self.cells.get_mut(name)
    }

    /// Cells in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HandleCell<H>)> {
        self.order
            .iter()
            .filter_map(|name| self.cells.get(name).map(|cell| (name.as_str(), cell)))
    }

    /// Populate the cell for `name`.
    ///
    /// Returns `false` (and drops `handle`) when `name` is not registered.
    pub fn mount(&mut self, name: &str, handle: H) -> bool {
        match self.cells.get_mut(name) {
            Some(cell) => {
                trace!("Mounted target section '{}'", name);
                cell.set(handle);
                true
            }
            None => {
                debug!("Ignoring mount for unregistered target '{}'", name);
                false
            }
        }
    }

    /// Clear the cell for `name`, returning the handle it held
    pub fn unmount(&mut self, name: &str) -> Option<H> {
        let handle = self.cells.get_mut(name).and_then(HandleCell::take);
        if handle.is_some() {
            trace!("Unmounted target section '{}'", name);
        }
        handle
    }

    /// Clear every cell, keeping the registered names
    pub fn unmount_all(&mut self) {
        for cell in self.cells.values_mut() {
            cell.take();
        }
    }

    /// Bring the key set in line with `names`.
    ///
    /// Cells for names that persist keep their handle, cells for removed names
    /// are dropped, and new names get empty cells. Iteration order follows
    /// `names` afterwards.
    pub fn reconcile<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut previous = std::mem::take(&mut self.cells);
        let mut order = Vec::new();
        let mut added = 0usize;

        for name in names {
            let name = name.into();
            if self.cells.contains_key(&name) {
                continue;
            }
            let cell = previous.remove(&name).unwrap_or_else(|| {
                added += 1;
                HandleCell::default()
            });
            self.cells.insert(name.clone(), cell);
            order.push(name);
        }

        self.order = order;
        debug!(
            "Reconciled target registry: {} kept, {} added, {} dropped",
            self.order.len() - added,
            added,
            previous.len()
        );
    }
}

/// Imperative handle a parent uses to expand or collapse targets by name.
///
/// Holds no state of its own; every call is forwarded to the mounted section
/// registered under that name. Unknown names and sections that have not
/// mounted yet are ignored.
pub struct ProjectDetailsHandle<'a, H: TargetHandle> {
    registry: &'a mut TargetHandleRegistry<H>,
}

impl<'a, H: TargetHandle> ProjectDetailsHandle<'a, H> {
    pub fn new(registry: &'a mut TargetHandleRegistry<H>) -> Self {
        Self { registry }
    }

    pub fn collapse_target(&mut self, target_name: &str) {
        match self.mounted(target_name) {
            Some(handle) => handle.collapse(),
            None => debug!("collapse_target: no mounted section for '{}'", target_name),
        }
    }

    pub fn expand_target(&mut self, target_name: &str) {
        match self.mounted(target_name) {
            Some(handle) => handle.expand(),
            None => debug!("expand_target: no mounted section for '{}'", target_name),
        }
    }

    fn mounted(&mut self, target_name: &str) -> Option<&mut H> {
        self.registry
            .get_mut(target_name)
            .and_then(HandleCell::get_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    #[test]
    fn test_new_registers_every_name_empty() {
        let registry: TargetHandleRegistry<MockTargetHandle> =
            TargetHandleRegistry::new(["build", "test"]);

        assert_eq!(registry.names(), &["build", "test"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("build").is_some_and(|c| !c.is_mounted()));
        assert!(registry.get("test").is_some_and(|c| !c.is_mounted()));
        assert!(registry.get("lint").is_none());
    }

    #[test]
    fn test_new_skips_duplicate_names() {
        let registry: TargetHandleRegistry<MockTargetHandle> =
            TargetHandleRegistry::new(["build", "build", "test"]);
        assert_eq!(registry.names(), &["build", "test"]);
    }

    #[test]
    fn test_mount_and_unmount() {
        let mut registry = TargetHandleRegistry::new(["build"]);

        assert!(registry.mount("build", MockTargetHandle::new()));
        assert!(registry.get("build").is_some_and(HandleCell::is_mounted));

        assert!(registry.unmount("build").is_some());
        assert!(registry.get("build").is_some_and(|c| !c.is_mounted()));
        assert!(registry.unmount("build").is_none());
    }

    #[test]
    fn test_mount_unregistered_name_is_rejected() {
        let mut registry = TargetHandleRegistry::new(["build"]);
        assert!(!registry.mount("deploy", MockTargetHandle::new()));
        assert!(!registry.contains("deploy"));
    }

    #[test]
    fn test_handle_forwards_expand_then_collapse_in_order() {
        let mut seq = Sequence::new();
        let mut mock = MockTargetHandle::new();
        mock.expect_expand()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mock.expect_collapse()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut registry = TargetHandleRegistry::new(["build", "test"]);
        registry.mount("build", mock);

        let mut handle = ProjectDetailsHandle::new(&mut registry);
        handle.expand_target("build");
        handle.collapse_target("build");
    }

    #[test]
    fn test_handle_only_reaches_named_target() {
        let mut build = MockTargetHandle::new();
        build.expect_expand().times(1).return_const(());
        build.expect_collapse().never();
        let mut test = MockTargetHandle::new();
        test.expect_expand().never();
        test.expect_collapse().never();

        let mut registry = TargetHandleRegistry::new(["build", "test"]);
        registry.mount("build", build);
        registry.mount("test", test);

        ProjectDetailsHandle::new(&mut registry).expand_target("build");
    }

    #[test]
    fn test_handle_unknown_name_is_noop() {
        let mut mock = MockTargetHandle::new();
        mock.expect_expand().never();
        mock.expect_collapse().never();

        let mut registry = TargetHandleRegistry::new(["build"]);
        registry.mount("build", mock);

        let mut handle = ProjectDetailsHandle::new(&mut registry);
        handle.expand_target("deploy");
        handle.collapse_target("deploy");
        handle.expand_target("");
    }

    #[test]
    fn test_handle_unmounted_cell_is_noop() {
        let mut registry: TargetHandleRegistry<MockTargetHandle> =
            TargetHandleRegistry::new(["build"]);

        let mut handle = ProjectDetailsHandle::new(&mut registry);
        handle.expand_target("build");
        handle.collapse_target("build");

        assert!(registry.get("build").is_some_and(|c| !c.is_mounted()));
    }

    #[test]
    fn test_reconcile_preserves_persisting_handles() {
        let mut kept = MockTargetHandle::new();
        kept.expect_collapse().times(1).return_const(());

        let mut registry = TargetHandleRegistry::new(["build", "test"]);
        registry.mount("build", kept);
        registry.mount("test", MockTargetHandle::new());

        registry.reconcile(["lint", "build"]);

        assert_eq!(registry.names(), &["lint", "build"]);
        assert!(registry.get("build").is_some_and(HandleCell::is_mounted));
        assert!(registry.get("lint").is_some_and(|c| !c.is_mounted()));
        assert!(!registry.contains("test"));

        ProjectDetailsHandle::new(&mut registry).collapse_target("build");
    }

    #[test]
    fn test_reconcile_to_empty() {
        let mut registry = TargetHandleRegistry::new(["build"]);
        registry.mount("build", MockTargetHandle::new());

        registry.reconcile(Vec::<String>::new());

        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_unmount_all_keeps_names() {
        let mut registry = TargetHandleRegistry::new(["build", "test"]);
        registry.mount("build", MockTargetHandle::new());
        registry.mount("test", MockTargetHandle::new());

        registry.unmount_all();

        assert_eq!(registry.len(), 2);
        assert!(registry.iter().all(|(_, cell)| !cell.is_mounted()));
    }
}
