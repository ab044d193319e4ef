//! Root controller resolution tests
//!
//! Pod -> ReplicaSet -> Deployment hops and status folding per root.

use kubetree::models::{HealthStatus, ResourceNode, ResourceRef};
use kubetree::topology::{pods_for_root, resolve_roots, root_name};

const GROUP: &str = "apps/v1";

fn owner(kind: &str, name: &str) -> ResourceRef {
    ResourceRef::new(GROUP, kind, name)
}

fn pod(name: &str, status: HealthStatus, owned_by: ResourceRef) -> ResourceNode {
    ResourceNode::new("Pod", name)
        .with_status(status)
        .owned_by(owned_by)
}

fn replica_set(name: &str, deployment: &str) -> ResourceNode {
    ResourceNode::new("ReplicaSet", name)
        .with_group(GROUP)
        .owned_by(owner("Deployment", deployment))
}

fn fixture() -> Vec<ResourceNode> {
    vec![
        ResourceNode::new("Deployment", "Deployment").with_group(GROUP),
        ResourceNode::new("Deployment", "Deployment2").with_group(GROUP),
        ResourceNode::new("StatefulSet", "StatefulSet1").with_group(GROUP),
        replica_set("ReplicaSet1", "Deployment"),
        replica_set("ReplicaSet2", "Deployment"),
        replica_set("ReplicaSet3", "Deployment2"),
        pod("pod1", HealthStatus::Healthy, owner("ReplicaSet", "ReplicaSet1")),
        pod("pod2", HealthStatus::Healthy, owner("ReplicaSet", "ReplicaSet2")),
        pod("pod5", HealthStatus::Degraded, owner("ReplicaSet", "ReplicaSet2")),
        pod("pod3", HealthStatus::Unknown, owner("ReplicaSet", "ReplicaSet3")),
        pod("pod4", HealthStatus::Unknown, owner("StatefulSet", "StatefulSet1")),
        pod("pod6", HealthStatus::Unknown, owner("StatefulSet", "StatefulSet1")),
    ]
}

#[test]
fn test_status_fold_per_root() {
    let roots = resolve_roots(&fixture());
    assert_eq!(
        roots,
        vec![
            ("apps/v1/Deployment/Deployment".to_string(), HealthStatus::Degraded),
            ("apps/v1/Deployment/Deployment2".to_string(), HealthStatus::Unknown),
            ("apps/v1/StatefulSet/StatefulSet1".to_string(), HealthStatus::Unknown),
        ]
    );
}

#[test]
fn test_roots_do_not_depend_on_input_order() {
    let mut reversed = fixture();
    reversed.reverse();
    assert_eq!(resolve_roots(&reversed), resolve_roots(&fixture()));
}

#[test]
fn test_pods_without_owners_have_no_root() {
    let nodes = vec![
        ResourceNode::new("Pod", "standalone").with_status(HealthStatus::Healthy),
        ResourceNode::new("Service", "web"),
    ];
    assert!(resolve_roots(&nodes).is_empty());
}

#[test]
fn test_every_pod_appears_in_exactly_one_root() {
    let nodes = fixture();
    let roots = resolve_roots(&nodes);
    let owned_pods = nodes
        .iter()
        .filter(|n| n.kind == "Pod" && !n.owner_refs.is_empty())
        .count();

    let mut attributed = 0;
    for (path, _) in &roots {
        attributed += pods_for_root(&nodes, root_name(path), 10).len();
    }
    assert_eq!(attributed, owned_pods);
}

#[test]
fn test_replica_set_without_owner_is_its_own_root() {
    let nodes = vec![
        ResourceNode::new("ReplicaSet", "orphan").with_group(GROUP),
        pod("orphan-a", HealthStatus::Progressing, owner("ReplicaSet", "orphan")),
    ];
    assert_eq!(
        resolve_roots(&nodes),
        vec![("apps/v1/ReplicaSet/orphan".to_string(), HealthStatus::Progressing)]
    );
}

#[test]
fn test_pods_for_root_collects_through_replica_sets() {
    let nodes = fixture();
    let names: Vec<&str> = pods_for_root(&nodes, "deployment", 10)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["pod1", "pod2", "pod5"]);
}

#[test]
fn test_empty_snapshot_has_no_roots_or_pods() {
    assert!(resolve_roots(&[]).is_empty());
    assert!(pods_for_root(&[], "Deployment", 10).is_empty());
}
