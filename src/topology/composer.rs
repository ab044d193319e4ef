//! Categorized navigation forest
//!
//! Shape of the forest handed to the tree UI:
//!
//! ```text
//! Workloads                 (category, status = fold of its kinds)
//! ├── Deployment            (kind summary, status = fold of members)
//! ├── Pod                   (kind summary)
//! │   ├── web               (root controller entry from `resolve_roots`)
//! │   └── db
//! └── ReplicaSet
//! Networking
//! └── Service
//! ```
//!
//! Only `Pod` gets children; every other kind summary is a leaf. Output is a
//! pure function of the input list: same input, identical forest.

use super::roots::resolve_roots;
use super::subtree::{MAX_OWNERSHIP_DEPTH, build_subtree_with_depth};
use crate::models::{
    Category, HealthStatus, KindKey, ResourceKind, ResourceNode, TopologyNode, category_of_key,
    combine, fold_statuses,
};
use std::collections::BTreeMap;

/// A freshly composed navigation forest
pub type Forest = Vec<TopologyNode>;

/// Members of one kind inside a category
struct KindGroup {
    display_name: String,
    status: HealthStatus,
}

/// Per-kind ownership views with a fixed depth guard.
///
/// The categorized forest never expands ownership chains, so it has no
/// depth setting; use the free `compose` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composer {
    max_depth: usize,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(MAX_OWNERSHIP_DEPTH)
    }
}

impl Composer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Ownership trees rooted at every node of `kind`, for per-kind tables
    pub fn kind_view(&self, nodes: &[ResourceNode], kind: &str) -> Forest {
        build_subtree_with_depth(nodes, kind, self.max_depth)
    }
}

/// Build the categorized navigation forest from a flat node list
pub fn compose(nodes: &[ResourceNode]) -> Forest {
    let mut categories: BTreeMap<Category, BTreeMap<KindKey, KindGroup>> = BTreeMap::new();

    for node in nodes {
        let key = node.kind_key();
        let category = category_of_key(&key);
        let group = categories
            .entry(category)
            .or_default()
            .entry(key)
            .or_insert_with_key(|key| KindGroup {
                display_name: display_kind(key, &node.kind),
                status: HealthStatus::Unknown,
            });
        group.status = combine(group.status, node.health_status);
    }

    let forest: Forest = categories
        .into_iter()
        .map(|(category, kinds)| {
            let kind_nodes: Vec<TopologyNode> = kinds
                .into_iter()
                .map(|(key, group)| kind_node(&key, group, nodes))
                .collect();
            let status = fold_statuses(kind_nodes.iter().map(|k| k.rolled_up_status));
            TopologyNode::summary(category.as_str(), status, kind_nodes)
        })
        .collect();

    tracing::debug!(
        "Composed forest with {} categories from {} nodes",
        forest.len(),
        nodes.len()
    );
    forest
}

fn kind_node(key: &KindKey, group: KindGroup, nodes: &[ResourceNode]) -> TopologyNode {
    let children = if key.is(ResourceKind::Pod) {
        resolve_roots(nodes)
            .into_iter()
            .map(|(path, status)| root_entry(&path, status))
            .collect()
    } else {
        Vec::new()
    };

    let mut node = TopologyNode::summary(&group.display_name, group.status, children);
    node.resource.kind = group.display_name;
    node
}

/// Forest entry for a root controller; carries the kind/group parsed from its path
fn root_entry(path: &str, status: HealthStatus) -> TopologyNode {
    let mut segments = path.rsplitn(3, '/');
    let name = segments.next().unwrap_or_default();
    let kind = segments.next().unwrap_or_default();
    let group = segments.next().unwrap_or_default();

    let resource = ResourceNode::new(kind, name)
        .with_group(group)
        .with_status(status);
    TopologyNode::leaf(resource)
}

/// Canonical spelling for well-known kinds, first-seen spelling otherwise
fn display_kind(key: &KindKey, raw: &str) -> String {
    key.known()
        .map(|kind| kind.as_str().to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceRef;

    #[test]
    fn test_root_entry_parses_path() {
        let entry = root_entry("apps/v1/Deployment/web", HealthStatus::Degraded);
        assert_eq!(entry.name(), "web");
        assert_eq!(entry.resource.kind, "Deployment");
        assert_eq!(entry.resource.group, "apps/v1");
        assert_eq!(entry.rolled_up_status, HealthStatus::Degraded);
        assert!(entry.is_leaf());
    }

    #[test]
    fn test_kind_spelling_is_canonicalized() {
        let nodes = vec![
            ResourceNode::new("configmap", "a"),
            ResourceNode::new("ConfigMap", "b"),
        ];
        let forest = compose(&nodes);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children().len(), 1);
        assert_eq!(forest[0].children()[0].name(), "ConfigMap");
    }

    #[test]
    fn test_pod_without_owner_is_leaf_summary() {
        let nodes = vec![ResourceNode::new("Pod", "lonely").with_status(HealthStatus::Healthy)];
        let forest = compose(&nodes);
        let pod = &forest[0].children()[0];
        assert_eq!(pod.name(), "Pod");
        assert!(pod.is_leaf());
        assert_eq!(pod.rolled_up_status, HealthStatus::Healthy);
    }

    #[test]
    fn test_composer_kind_view_uses_depth_guard() {
        let nodes = vec![
            ResourceNode::new("Deployment", "a").owned_by(ResourceRef::new("", "ReplicaSet", "b")),
            ResourceNode::new("ReplicaSet", "b").owned_by(ResourceRef::new("", "Deployment", "a")),
        ];
        let view = Composer::new(1).kind_view(&nodes, "Deployment");
        assert_eq!(view[0].children().len(), 1);
        assert!(view[0].children()[0].is_leaf());
    }
}
