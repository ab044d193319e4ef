//! Shared topology session state
//!
//! Holds the latest snapshot, the active filter and everything derived from
//! them (forest, roots, selection). Derived values are rebuilt from scratch on
//! every publish or filter change; nothing is patched incrementally.

mod source;

pub use source::{FileSnapshotSource, SnapshotSource, StaticSnapshotSource};

#[cfg(test)]
pub use source::MockSnapshotSource;

use crate::error::Result;
use crate::filter::{self, MIN_SEARCH_LENGTH, NodeFilter};
use crate::models::ResourceNode;
use crate::selection::{SelectionState, initial_selection, recompute};
use crate::topology::{
    Composer, Forest, MAX_OWNERSHIP_DEPTH, RootStatus, StatusSummary, compose, pods_for_root,
    resolve_roots,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub max_depth: usize,
    pub min_search_length: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_depth: MAX_OWNERSHIP_DEPTH,
            min_search_length: MIN_SEARCH_LENGTH,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    nodes: Vec<ResourceNode>,
    filter: NodeFilter,
    visible: Vec<ResourceNode>,
    forest: Forest,
    roots: Vec<RootStatus>,
    selection: SelectionState,
}

impl Inner {
    fn rebuild(&mut self) {
        self.visible = filter::apply(&self.nodes, &self.filter);
        self.forest = compose(&self.visible);
        self.roots = resolve_roots(&self.visible);
    }

    fn reset_selection_if_stale(&mut self) {
        if crate::selection::selected_leaf(&self.selection, &self.forest).is_none() {
            self.selection = initial_selection(&self.forest);
        }
    }
}

/// Thread-safe topology store
#[derive(Clone)]
pub struct TopologyStore {
    inner: Arc<RwLock<Inner>>,
    composer: Composer,
    settings: SessionSettings,
}

impl TopologyStore {
    pub fn new() -> Self {
        Self::with_settings(SessionSettings::default())
    }

    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            composer: Composer::new(settings.max_depth),
            settings,
        }
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    // A panic while holding the lock leaves data that is still consistent
    // (every mutation rebuilds derived state in full), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the snapshot and rebuild everything derived from it.
    /// The selection starts over on the new forest.
    pub fn publish(&self, nodes: Vec<ResourceNode>) {
        let mut state = self.write();
        state.nodes = nodes;
        state.rebuild();
        state.selection = initial_selection(&state.forest);
        tracing::debug!(
            "Published snapshot: {} nodes, {} visible, {} roots",
            state.nodes.len(),
            state.visible.len(),
            state.roots.len()
        );
    }

    /// Change the filter. Search terms shorter than the configured minimum
    /// are held back; clearing an active search resets the selection.
    pub fn set_filter(&self, filter: NodeFilter) {
        let effective = filter.effective(self.settings.min_search_length);
        let mut state = self.write();
        if state.filter == effective {
            return;
        }

        let search_cleared = state.filter.has_search() && !effective.has_search();
        state.filter = effective;
        state.rebuild();
        if search_cleared {
            state.selection = initial_selection(&state.forest);
        } else {
            state.reset_selection_if_stale();
        }
        tracing::debug!(
            "Filter status={:?} search={:?}: {} visible",
            state.filter.status_type,
            state.filter.search_term,
            state.visible.len()
        );
    }

    /// Apply a click on the current forest and return the new selection
    pub fn click<S: AsRef<str>>(&self, clicked: &str, ancestors: &[S]) -> SelectionState {
        let mut state = self.write();
        let next = recompute(&state.selection, &state.forest, clicked, ancestors);
        state.selection = next.clone();
        next
    }

    /// Fetch from `source` and publish. On failure the previous snapshot stays.
    pub fn refresh_from(&self, source: &dyn SnapshotSource) -> Result<usize> {
        match source.fetch() {
            Ok(nodes) => {
                let count = nodes.len();
                self.publish(nodes);
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(
                    "Refresh from {} failed, keeping previous snapshot: {}",
                    source.describe(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn filter(&self) -> NodeFilter {
        self.read().filter.clone()
    }

    /// The full, unfiltered snapshot
    pub fn nodes(&self) -> Vec<ResourceNode> {
        self.read().nodes.clone()
    }

    /// Nodes passing the active filter
    pub fn visible_nodes(&self) -> Vec<ResourceNode> {
        self.read().visible.clone()
    }

    pub fn forest(&self) -> Forest {
        self.read().forest.clone()
    }

    pub fn roots(&self) -> Vec<RootStatus> {
        self.read().roots.clone()
    }

    pub fn selection(&self) -> SelectionState {
        self.read().selection.clone()
    }

    /// Status counts over the full snapshot (the filter does not apply)
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_nodes(&self.read().nodes)
    }

    /// Ownership trees for one kind, over the visible nodes
    pub fn kind_view(&self, kind: &str) -> Forest {
        self.composer.kind_view(&self.read().visible, kind)
    }

    /// Pods below the named root controller, over the full snapshot
    pub fn pods_for_root(&self, root_name: &str) -> Vec<ResourceNode> {
        let state = self.read();
        pods_for_root(&state.nodes, root_name, self.settings.max_depth)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Default for TopologyStore {
    fn default() -> Self {
        Self::new()
    }
}
