//! Root controller resolution for pods
//!
//! Walks every pod up to its top-level controller (at most two hops:
//! Pod -> ReplicaSet -> Deployment) and rolls pod statuses up per controller.

use super::ownership::{OwnerIndex, resolve_ref};
use crate::models::{HealthStatus, KindKey, ResourceKind, ResourceNode, ResourceRef, combine};
use std::collections::{BTreeMap, HashSet};

/// `(root path, rolled-up pod status)`; path is `{group}/{kind}/{name}`
pub type RootStatus = (String, HealthStatus);

/// Resolve the root controller of every pod and fold pod statuses per root.
///
/// Pods without an owner reference contribute nothing. Output is sorted
/// ascending by root path.
pub fn resolve_roots(all: &[ResourceNode]) -> Vec<RootStatus> {
    let mut roots: BTreeMap<String, HealthStatus> = BTreeMap::new();

    for pod in all.iter().filter(|node| node.is_kind(ResourceKind::Pod)) {
        // Pods have at most one controlling owner in this model
        let Some(owner) = pod.owner_refs.first() else {
            continue;
        };
        let root = terminal_owner(owner, all);
        roots
            .entry(root.path())
            .and_modify(|status| *status = combine(*status, pod.health_status))
            .or_insert(pod.health_status);
    }

    tracing::debug!("Resolved {} pod root controller(s)", roots.len());
    roots.into_iter().collect()
}

/// Follow a pod's owner one further hop when it is a ReplicaSet.
///
/// A dangling ReplicaSet reference, or a ReplicaSet without an owner, is
/// itself the root.
fn terminal_owner<'a>(owner: &'a ResourceRef, all: &'a [ResourceNode]) -> &'a ResourceRef {
    if !KindKey::new(&owner.kind).is(ResourceKind::ReplicaSet) {
        return owner;
    }

    match resolve_ref(owner, all).into_iter().next() {
        Some(replica_set) => replica_set.owner_refs.first().unwrap_or(owner),
        None => {
            tracing::debug!("Dangling owner reference {}", owner.path());
            owner
        }
    }
}

/// Last path segment, the controller name shown in pod pickers
pub fn root_name(root_path: &str) -> &str {
    root_path.rsplit('/').next().unwrap_or(root_path)
}

/// All pods below the unowned node(s) named `root_name` (case-insensitive).
///
/// Walks down level by level through the ownership index. Every node is
/// visited at most once, and the walk stops after `max_depth` levels.
pub fn pods_for_root<'a>(
    all: &'a [ResourceNode],
    root_name: &str,
    max_depth: usize,
) -> Vec<&'a ResourceNode> {
    let index = OwnerIndex::new(all);
    let mut visited: HashSet<*const ResourceNode> = HashSet::new();
    let mut level: Vec<&'a ResourceNode> = all
        .iter()
        .filter(|node| node.owner_refs.is_empty() && node.name.eq_ignore_ascii_case(root_name))
        .filter(|node| visited.insert(std::ptr::from_ref(*node)))
        .collect();

    let mut pods: Vec<&'a ResourceNode> = Vec::new();
    let mut depth = 0;
    while !level.is_empty() && depth <= max_depth {
        pods.extend(level.iter().filter(|n| n.is_kind(ResourceKind::Pod)));

        let mut next = Vec::new();
        for &node in &level {
            for &child in index.children(node) {
                if visited.insert(std::ptr::from_ref(child)) {
                    next.push(child);
                }
            }
        }
        level = next;
        depth += 1;
    }
    pods
}
