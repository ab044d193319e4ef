//! Topology composition tests
//!
//! Category forest shape and ordering, per-kind subtrees, depth guarding.

use kubetree::models::{HealthStatus, ResourceNode, ResourceRef, TopologyNode};
use kubetree::topology::{Composer, build_subtree, build_subtree_with_depth, compose};

fn owned(kind: &str, name: &str, status: HealthStatus, owner: (&str, &str)) -> ResourceNode {
    ResourceNode::new(kind, name)
        .with_status(status)
        .owned_by(ResourceRef::new("apps", owner.0, owner.1))
}

fn application() -> Vec<ResourceNode> {
    vec![
        ResourceNode::new("ServiceMonitor", "web-monitor"),
        ResourceNode::new("Service", "web-svc").with_status(HealthStatus::Healthy),
        ResourceNode::new("service", "api-svc").with_status(HealthStatus::Missing),
        owned("Pod", "web-1-b", HealthStatus::Degraded, ("ReplicaSet", "web-1")),
        owned("Pod", "web-1-a", HealthStatus::Healthy, ("ReplicaSet", "web-1")),
        owned("ReplicaSet", "web-1", HealthStatus::Healthy, ("Deployment", "web")),
        ResourceNode::new("Deployment", "web")
            .with_group("apps")
            .with_status(HealthStatus::Healthy),
        ResourceNode::new("StatefulSet", "db")
            .with_group("apps")
            .with_status(HealthStatus::Progressing),
        owned("Pod", "db-0", HealthStatus::Progressing, ("StatefulSet", "db")),
        ResourceNode::new("ConfigMap", "settings"),
        ResourceNode::new("ClusterRole", "reader"),
    ]
}

fn names(nodes: &[TopologyNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.name()).collect()
}

#[test]
fn test_categories_in_fixed_order_and_empty_ones_omitted() {
    let forest = compose(&application());
    assert_eq!(
        names(&forest),
        vec![
            "Workloads",
            "Networking",
            "Config & Storage",
            "RBAC",
            "Custom Resource"
        ]
    );
}

#[test]
fn test_kinds_sorted_within_category() {
    let forest = compose(&application());
    assert_eq!(
        names(forest[0].children()),
        vec!["Deployment", "Pod", "ReplicaSet", "StatefulSet"]
    );
    // "service" and "Service" are one kind
    assert_eq!(names(forest[1].children()), vec!["Service"]);
}

#[test]
fn test_pod_kind_lists_root_controllers() {
    let forest = compose(&application());
    let pod_kind = &forest[0].children()[1];
    assert_eq!(names(pod_kind.children()), vec!["web", "db"]);
    assert_eq!(pod_kind.children()[0].rolled_up_status, HealthStatus::Degraded);
    assert_eq!(pod_kind.children()[1].rolled_up_status, HealthStatus::Progressing);
    assert_eq!(pod_kind.children()[0].resource.kind, "Deployment");

    // Other kind summaries are leaves
    assert!(forest[0].children()[0].is_leaf());
}

#[test]
fn test_rolled_up_statuses() {
    let forest = compose(&application());
    assert_eq!(forest[0].rolled_up_status, HealthStatus::Degraded);
    assert_eq!(forest[1].rolled_up_status, HealthStatus::Missing);
    assert_eq!(forest[2].rolled_up_status, HealthStatus::Unknown);
}

#[test]
fn test_compose_is_deterministic() {
    let mut shuffled = application();
    shuffled.reverse();
    shuffled.swap(0, 4);

    assert_eq!(compose(&application()), compose(&application()));
    assert_eq!(compose(&shuffled), compose(&application()));
}

#[test]
fn test_empty_input_gives_empty_forest() {
    assert!(compose(&[]).is_empty());
    assert!(build_subtree(&[], "Deployment").is_empty());
}

#[test]
fn test_deployment_subtree_nests_three_levels() {
    let trees = build_subtree(&application(), "deployment");
    assert_eq!(trees.len(), 1);

    let deployment = &trees[0];
    assert_eq!(deployment.name(), "web");
    assert_eq!(deployment.rolled_up_status, HealthStatus::Degraded);

    let replica_sets = deployment.children();
    assert_eq!(names(replica_sets), vec!["web-1"]);
    assert_eq!(names(replica_sets[0].children()), vec!["web-1-a", "web-1-b"]);
    assert!(replica_sets[0].children().iter().all(|pod| pod.is_leaf()));
}

#[test]
fn test_statefulset_subtree() {
    let trees = build_subtree(&application(), "StatefulSet");
    assert_eq!(trees.len(), 1);
    assert_eq!(names(trees[0].children()), vec!["db-0"]);
}

#[test]
fn test_pod_only_list_is_returned_flat() {
    let pods = vec![
        ResourceNode::new("Pod", "a").with_status(HealthStatus::Healthy),
        ResourceNode::new("Pod", "b"),
    ];
    let trees = build_subtree(&pods, "Pod");
    assert_eq!(names(&trees), vec!["a", "b"]);
    assert!(trees.iter().all(|t| t.is_leaf()));
}

#[test]
fn test_cyclic_ownership_terminates() {
    // a owns b, b owns a
    let nodes = vec![
        ResourceNode::new("Widget", "a").owned_by(ResourceRef::new("", "Widget", "b")),
        ResourceNode::new("Widget", "b").owned_by(ResourceRef::new("", "Widget", "a")),
    ];
    let trees = build_subtree_with_depth(&nodes, "Widget", 3);
    assert_eq!(trees.len(), 2);

    fn depth(node: &TopologyNode) -> usize {
        1 + node.children().iter().map(depth).max().unwrap_or(0)
    }
    // a -> b -> a, the repeated a cut off as a leaf
    assert_eq!(depth(&trees[0]), 3);
    assert_eq!(depth(&trees[1]), 3);
}

#[test]
fn test_colliding_owner_names_attach_children_to_both() {
    let nodes = vec![
        ResourceNode::new("Deployment", "web").with_namespace("a"),
        ResourceNode::new("Deployment", "web").with_namespace("b"),
        owned("ReplicaSet", "web-b1", HealthStatus::Degraded, ("Deployment", "web")).with_namespace("b"),
        owned("ReplicaSet", "web-a1", HealthStatus::Healthy, ("Deployment", "web")).with_namespace("a"),
    ];
    let trees = build_subtree(&nodes, "Deployment");
    assert_eq!(trees.len(), 2);
    for tree in &trees {
        assert_eq!(names(tree.children()), vec!["web-a1", "web-b1"]);
        assert_eq!(tree.rolled_up_status, HealthStatus::Degraded);
    }
    assert_eq!(trees[0].resource.namespace, "a");
    assert_eq!(trees[1].resource.namespace, "b");
}

#[test]
fn test_composer_honours_depth_setting() {
    let nodes = application();
    let shallow = Composer::new(1).kind_view(&nodes, "Deployment");
    // The replica set is attached but cut off as a leaf
    assert_eq!(names(shallow[0].children()), vec!["web-1"]);
    assert!(shallow[0].children()[0].is_leaf());

    let full = Composer::default().kind_view(&nodes, "Deployment");
    assert!(!full[0].children()[0].is_leaf());
}
