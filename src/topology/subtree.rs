//! Downward tree building from every node of a target kind
//!
//! Each node of the target kind becomes a root; owned nodes are attached
//! recursively until a node owns nothing. A node already on the current
//! path is attached as a leaf, so cyclic owner references terminate; the
//! fixed depth cap still bounds very long chains.

use super::ownership::OwnerIndex;
use crate::models::{KindKey, ResourceNode, TopologyNode, combine};

/// Default depth guard; real hierarchies are at most three levels deep
pub const MAX_OWNERSHIP_DEPTH: usize = 10;

/// Build one tree per node of `target_kind` (case-insensitive)
pub fn build_subtree(all: &[ResourceNode], target_kind: &str) -> Vec<TopologyNode> {
    build_subtree_with_depth(all, target_kind, MAX_OWNERSHIP_DEPTH)
}

/// `build_subtree` with an explicit depth guard
pub fn build_subtree_with_depth(
    all: &[ResourceNode],
    target_kind: &str,
    max_depth: usize,
) -> Vec<TopologyNode> {
    let target = KindKey::new(target_kind);
    let index = OwnerIndex::new(all);

    all.iter()
        .filter(|node| node.kind_key() == target)
        .map(|node| build_node(node, &index, &mut Vec::new(), max_depth))
        .collect()
}

fn build_node<'a>(
    node: &'a ResourceNode,
    index: &OwnerIndex<'a>,
    path: &mut Vec<&'a ResourceNode>,
    max_depth: usize,
) -> TopologyNode {
    if path.iter().any(|ancestor| std::ptr::eq(*ancestor, node)) {
        tracing::warn!(
            "Ownership cycle through {}; treating it as a leaf",
            node.path()
        );
        return TopologyNode::leaf(node.clone());
    }

    let owned = index.children(node);
    if owned.is_empty() {
        return TopologyNode::leaf(node.clone());
    }
    let depth = path.len();
    if depth >= max_depth {
        tracing::warn!(
            "Ownership depth limit ({}) reached at {}; treating it as a leaf",
            max_depth,
            node.path()
        );
        return TopologyNode::leaf(node.clone());
    }

    path.push(node);
    let mut children: Vec<TopologyNode> = owned
        .iter()
        .map(|child| build_node(child, index, path, max_depth))
        .collect();
    path.pop();
    // Stable, so same-name collisions keep snapshot order
    children.sort_by(|a, b| a.name().cmp(b.name()));

    let rolled_up_status = children
        .iter()
        .map(|child| child.rolled_up_status)
        .fold(node.health_status, combine);

    TopologyNode::with_children(node.clone(), children, rolled_up_status)
}
