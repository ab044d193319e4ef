//! Ownership matching between flat nodes
//!
//! A node is a child of another when one of its owner references carries the
//! other's kind and name (exact, case-sensitive; group ignored). There is no
//! cycle detection here: callers track the nodes they have already visited.

use crate::models::{ResourceNode, ResourceRef};
use std::collections::HashMap;

/// Every node in `all` that names `node` as an owner, in input order
pub fn children_of<'a>(node: &ResourceNode, all: &'a [ResourceNode]) -> Vec<&'a ResourceNode> {
    all.iter()
        .filter(|candidate| candidate.owner_refs.iter().any(|owner| owner.points_at(node)))
        .collect()
}

/// Every node in `all` an owner reference resolves to.
///
/// Usually zero (dangling) or one; more than one means a kind/name collision
/// across namespaces, and all matches are returned.
pub fn resolve_ref<'a>(owner: &ResourceRef, all: &'a [ResourceNode]) -> Vec<&'a ResourceNode> {
    all.iter().filter(|node| owner.points_at(node)).collect()
}

/// Children lookup table over one snapshot, keyed by owner (kind, name)
///
/// Equivalent to calling `children_of` per node, without rescanning the
/// snapshot at every level of a subtree build.
#[derive(Debug, Default)]
pub struct OwnerIndex<'a> {
    by_owner: HashMap<(&'a str, &'a str), Vec<&'a ResourceNode>>,
}

impl<'a> OwnerIndex<'a> {
    pub fn new(all: &'a [ResourceNode]) -> Self {
        let mut by_owner: HashMap<(&'a str, &'a str), Vec<&'a ResourceNode>> = HashMap::new();
        for node in all {
            for owner in &node.owner_refs {
                let children = by_owner
                    .entry((owner.kind.as_str(), owner.name.as_str()))
                    .or_default();
                // A node listing the same owner twice is still one child
                if !children.iter().any(|c| std::ptr::eq(*c, node)) {
                    children.push(node);
                }
            }
        }
        Self { by_owner }
    }

    /// Children of `node`, in snapshot order
    pub fn children(&self, node: &'a ResourceNode) -> &[&'a ResourceNode] {
        self.by_owner
            .get(&(node.kind.as_str(), node.name.as_str()))
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }
}
