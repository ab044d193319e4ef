//! Selection and expansion state over a navigation forest
//!
//! The state is a set of lower-cased node names. Branch names in the set are
//! expanded rows; leaf names are the selected row. Clicking a branch toggles
//! it alone. Clicking a leaf clears any previously selected leaf, keeps every
//! expanded branch, and marks the clicked leaf plus its ancestors.
//!
//! At most one leaf of the current forest is ever marked.

mod defaults;

pub use defaults::{initial_selection, selected_leaf};

use crate::models::{TopologyNode, find_by_name};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Expanded/selected node names, stored lower-cased
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    names: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::new();
        for name in names {
            state.insert(name.as_ref());
        }
        state
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_lowercase());
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(&name.to_lowercase())
    }

    /// Flip a single marker
    pub fn toggle(&mut self, name: &str) {
        if !self.remove(name) {
            self.insert(name);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Recompute selection after a click; inputs are left untouched.
///
/// `ancestors` are the names on the path from the top of the forest down to
/// (excluding) the clicked node.
pub fn recompute<S: AsRef<str>>(
    current: &SelectionState,
    forest: &[TopologyNode],
    clicked: &str,
    ancestors: &[S],
) -> SelectionState {
    // Unknown names are treated as leaves
    let is_branch = locate(forest, ancestors, clicked)
        .map(|node| !node.is_leaf())
        .unwrap_or(false);

    if is_branch {
        tracing::trace!("Toggling branch {}", clicked);
        let mut next = current.clone();
        next.toggle(clicked);
        return next;
    }

    let leaves = leaf_names(forest);
    let mut next = SelectionState {
        names: current
            .names
            .iter()
            .filter(|name| !leaves.contains(*name))
            .cloned()
            .collect(),
    };
    for ancestor in ancestors {
        next.insert(ancestor.as_ref());
    }
    next.insert(clicked);

    tracing::trace!(
        "Selected leaf {} ({} markers, {} before)",
        clicked,
        next.len(),
        current.len()
    );
    next
}

/// Find the clicked node, preferring the one under the given ancestor path
fn locate<'a, S: AsRef<str>>(
    forest: &'a [TopologyNode],
    ancestors: &[S],
    name: &str,
) -> Option<&'a TopologyNode> {
    let mut level = forest;
    for ancestor in ancestors {
        match level
            .iter()
            .find(|node| node.name().eq_ignore_ascii_case(ancestor.as_ref()))
        {
            Some(node) => level = node.children(),
            None => return find_by_name(forest, name),
        }
    }
    level
        .iter()
        .find(|node| node.name().eq_ignore_ascii_case(name))
        .or_else(|| find_by_name(forest, name))
}

/// Lower-cased names of every leaf in the forest.
///
/// A name that also labels a branch somewhere is left out, so expansion
/// markers are never cleared by a leaf selection.
fn leaf_names(forest: &[TopologyNode]) -> BTreeSet<String> {
    let mut leaves = BTreeSet::new();
    let mut branches = BTreeSet::new();
    for root in forest {
        root.walk(&mut |node| {
            let name = node.name().to_lowercase();
            if node.is_leaf() {
                leaves.insert(name);
            } else {
                branches.insert(name);
            }
        });
    }
    leaves.retain(|name| !branches.contains(name));
    leaves
}
