//! Kind -> category catalog
//!
//! Fixed classification of Kubernetes kinds into the top-level groups of the
//! navigation forest. Lookup is case-insensitive and never fails: anything
//! unmatched is a custom resource.

use super::kind::{KindKey, ResourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level grouping of the navigation forest.
///
/// Variant order is the order categories are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Workloads,
    Networking,
    ConfigAndStorage,
    Rbac,
    Administration,
    CustomResource,
}

impl Category {
    /// Display name, also the name of the category's forest node
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Workloads => "Workloads",
            Category::Networking => "Networking",
            Category::ConfigAndStorage => "Config & Storage",
            Category::Rbac => "RBAC",
            Category::Administration => "Administration",
            Category::CustomResource => "Custom Resource",
        }
    }

    /// All categories in emit order
    pub fn all() -> &'static [Self] {
        &[
            Category::Workloads,
            Category::Networking,
            Category::ConfigAndStorage,
            Category::Rbac,
            Category::Administration,
            Category::CustomResource,
        ]
    }

    /// Resolve a category from its display name (case-insensitive)
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a well-known kind
pub fn category_of_kind(kind: ResourceKind) -> Category {
    match kind {
        ResourceKind::Deployment
        | ResourceKind::ReplicaSet
        | ResourceKind::Pod
        | ResourceKind::DaemonSet
        | ResourceKind::StatefulSet
        | ResourceKind::Job
        | ResourceKind::CronJob
        | ResourceKind::ReplicationController => Category::Workloads,
        ResourceKind::Service
        | ResourceKind::Ingress
        | ResourceKind::Endpoints
        | ResourceKind::EndpointSlice
        | ResourceKind::NetworkPolicy => Category::Networking,
        ResourceKind::ConfigMap
        | ResourceKind::Secret
        | ResourceKind::PersistentVolume
        | ResourceKind::PersistentVolumeClaim
        | ResourceKind::StorageClass
        | ResourceKind::VolumeSnapshot
        | ResourceKind::VolumeSnapshotContent
        | ResourceKind::VolumeSnapshotClass
        | ResourceKind::PodDisruptionBudget => Category::ConfigAndStorage,
        ResourceKind::ServiceAccount
        | ResourceKind::Role
        | ResourceKind::RoleBinding
        | ResourceKind::ClusterRole
        | ResourceKind::ClusterRoleBinding => Category::Rbac,
        ResourceKind::MutatingWebhookConfiguration
        | ResourceKind::ValidatingWebhookConfiguration
        | ResourceKind::PodSecurityPolicy => Category::Administration,
        ResourceKind::Prometheus | ResourceKind::Alertmanager | ResourceKind::ServiceMonitor => {
            Category::CustomResource
        }
    }
}

/// Classify any kind string; unknown kinds are custom resources
pub fn category_of(kind: &str) -> Category {
    category_of_key(&KindKey::new(kind))
}

/// Classify a normalized kind key
pub fn category_of_key(kind: &KindKey) -> Category {
    kind.known()
        .map(category_of_kind)
        .unwrap_or(Category::CustomResource)
}
