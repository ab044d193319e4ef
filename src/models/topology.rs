//! Forest node type shared by the subtree builder, the composer and the
//! selection manager.

use super::health::HealthStatus;
use super::resource::ResourceNode;
use serde::{Deserialize, Serialize};

/// A resource (or synthesized grouping) placed in a forest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyNode {
    #[serde(flatten)]
    pub resource: ResourceNode,
    /// `None` marks a leaf. Never `Some(vec![])`: constructors normalize it away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TopologyNode>>,
    #[serde(default)]
    pub rolled_up_status: HealthStatus,
}

impl TopologyNode {
    /// Wrap a resource as a leaf carrying its own status
    pub fn leaf(resource: ResourceNode) -> Self {
        let rolled_up_status = resource.health_status;
        Self {
            resource,
            children: None,
            rolled_up_status,
        }
    }

    /// Wrap a resource with children (empty children yield a leaf)
    pub fn with_children(
        resource: ResourceNode,
        children: Vec<TopologyNode>,
        rolled_up_status: HealthStatus,
    ) -> Self {
        Self {
            resource,
            children: if children.is_empty() {
                None
            } else {
                Some(children)
            },
            rolled_up_status,
        }
    }

    /// Synthesized node that only carries a name and a rolled-up status
    /// (category headings, per-kind summaries, root controller entries)
    pub fn summary(name: &str, rolled_up_status: HealthStatus, children: Vec<TopologyNode>) -> Self {
        let resource = ResourceNode {
            name: name.to_string(),
            ..Default::default()
        };
        Self::with_children(resource, children, rolled_up_status)
    }

    pub fn name(&self) -> &str {
        &self.resource.name
    }

    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().map(|c| c.is_empty()).unwrap_or(true)
    }

    pub fn children(&self) -> &[TopologyNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Depth-first (pre-order) walk over this node and its descendants
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a TopologyNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Depth-first search for a node by name, case-insensitively
pub fn find_by_name<'a>(forest: &'a [TopologyNode], name: &str) -> Option<&'a TopologyNode> {
    forest.iter().find_map(|node| {
        if node.name().eq_ignore_ascii_case(name) {
            Some(node)
        } else {
            find_by_name(node.children(), name)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_children_is_leaf() {
        let node = TopologyNode::with_children(
            ResourceNode::new("Deployment", "web"),
            Vec::new(),
            HealthStatus::Healthy,
        );
        assert!(node.is_leaf());
        assert!(node.children.is_none());
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let forest = vec![TopologyNode::summary(
            "Workloads",
            HealthStatus::Healthy,
            vec![TopologyNode::summary("Pod", HealthStatus::Healthy, vec![])],
        )];
        assert_eq!(find_by_name(&forest, "pod").map(|n| n.name()), Some("Pod"));
        assert!(find_by_name(&forest, "Service").is_none());
    }

    #[test]
    fn test_walk_is_pre_order() {
        let tree = TopologyNode::summary(
            "a",
            HealthStatus::Unknown,
            vec![
                TopologyNode::summary(
                    "b",
                    HealthStatus::Unknown,
                    vec![TopologyNode::summary("c", HealthStatus::Unknown, vec![])],
                ),
                TopologyNode::summary("d", HealthStatus::Unknown, vec![]),
            ],
        );
        let mut names = Vec::new();
        tree.walk(&mut |node| names.push(node.name().to_string()));
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }
}
