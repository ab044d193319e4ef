//! Default landing selection and lookup of the selected leaf

use super::{SelectionState, recompute};
use crate::models::{Category, ResourceKind, TopologyNode};

/// Path (top-down names) to the first leaf of the forest whose name is marked
pub fn selected_leaf<'a>(state: &SelectionState, forest: &'a [TopologyNode]) -> Option<Vec<&'a str>> {
    fn search<'a>(
        nodes: &'a [TopologyNode],
        state: &SelectionState,
        path: &mut Vec<&'a str>,
    ) -> bool {
        for node in nodes {
            path.push(node.name());
            if node.is_leaf() {
                if state.contains(node.name()) {
                    return true;
                }
            } else if state.contains(node.name()) && search(node.children(), state, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    if search(forest, state, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// Selection the navigation opens with for a fresh forest.
///
/// Prefers the first root controller under `Workloads -> Pod`; otherwise the
/// first leaf in the forest. An empty forest gives an empty selection.
pub fn initial_selection(forest: &[TopologyNode]) -> SelectionState {
    let Some(path) = pod_group_path(forest).or_else(|| first_leaf_path(forest)) else {
        return SelectionState::new();
    };
    let Some((leaf, ancestors)) = path.split_last() else {
        return SelectionState::new();
    };
    recompute(&SelectionState::new(), forest, leaf, ancestors)
}

fn pod_group_path(forest: &[TopologyNode]) -> Option<Vec<&str>> {
    let workloads = forest
        .iter()
        .find(|node| node.name() == Category::Workloads.as_str())?;
    let pods = workloads
        .children()
        .iter()
        .find(|node| node.name().eq_ignore_ascii_case(ResourceKind::Pod.as_str()))?;
    let first = pods.children().first()?;
    Some(vec![workloads.name(), pods.name(), first.name()])
}

fn first_leaf_path(forest: &[TopologyNode]) -> Option<Vec<&str>> {
    let mut path = Vec::new();
    let mut level = forest;
    while let Some(node) = level.first() {
        path.push(node.name());
        if node.is_leaf() {
            return Some(path);
        }
        level = node.children();
    }
    None
}
