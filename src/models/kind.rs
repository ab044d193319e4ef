//! Kubernetes kind definitions
//!
//! This module provides a centralized enum for the well-known Kubernetes kinds
//! the topology engine classifies, plus `KindKey`, the normalized key used for
//! every kind comparison. Kind strings arrive from snapshots with inconsistent
//! casing, so nothing outside this module should compare raw kind strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized (lower-cased) kind used for all kind comparisons
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindKey(String);

impl KindKey {
    pub fn new(kind: &str) -> Self {
        Self(kind.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this key names the given well-known kind
    pub fn is(&self, kind: ResourceKind) -> bool {
        self.0 == kind.key()
    }

    /// Resolve to a well-known kind, if this is one
    pub fn known(&self) -> Option<ResourceKind> {
        ResourceKind::from_str_case_insensitive(&self.0)
    }
}

impl From<&str> for KindKey {
    fn from(kind: &str) -> Self {
        KindKey::new(kind)
    }
}

impl From<ResourceKind> for KindKey {
    fn from(kind: ResourceKind) -> Self {
        KindKey(kind.key().to_string())
    }
}

impl fmt::Display for KindKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Enumeration of the Kubernetes kinds with a fixed place in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    // Workloads
    Deployment,
    ReplicaSet,
    Pod,
    DaemonSet,
    StatefulSet,
    Job,
    CronJob,
    ReplicationController,
    // Networking
    Service,
    Ingress,
    Endpoints,
    EndpointSlice,
    NetworkPolicy,
    // Config & storage
    ConfigMap,
    Secret,
    PersistentVolume,
    PersistentVolumeClaim,
    StorageClass,
    VolumeSnapshot,
    VolumeSnapshotContent,
    VolumeSnapshotClass,
    PodDisruptionBudget,
    // RBAC
    ServiceAccount,
    Role,
    RoleBinding,
    ClusterRole,
    ClusterRoleBinding,
    // Administration
    MutatingWebhookConfiguration,
    ValidatingWebhookConfiguration,
    PodSecurityPolicy,
    // Prometheus operator resources
    Prometheus,
    Alertmanager,
    ServiceMonitor,
}

impl ResourceKind {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Deployment => "Deployment",
            ResourceKind::ReplicaSet => "ReplicaSet",
            ResourceKind::Pod => "Pod",
            ResourceKind::DaemonSet => "DaemonSet",
            ResourceKind::StatefulSet => "StatefulSet",
            ResourceKind::Job => "Job",
            ResourceKind::CronJob => "CronJob",
            ResourceKind::ReplicationController => "ReplicationController",
            ResourceKind::Service => "Service",
            ResourceKind::Ingress => "Ingress",
            ResourceKind::Endpoints => "Endpoints",
            ResourceKind::EndpointSlice => "EndpointSlice",
            ResourceKind::NetworkPolicy => "NetworkPolicy",
            ResourceKind::ConfigMap => "ConfigMap",
            ResourceKind::Secret => "Secret",
            ResourceKind::PersistentVolume => "PersistentVolume",
            ResourceKind::PersistentVolumeClaim => "PersistentVolumeClaim",
            ResourceKind::StorageClass => "StorageClass",
            ResourceKind::VolumeSnapshot => "VolumeSnapshot",
            ResourceKind::VolumeSnapshotContent => "VolumeSnapshotContent",
            ResourceKind::VolumeSnapshotClass => "VolumeSnapshotClass",
            ResourceKind::PodDisruptionBudget => "PodDisruptionBudget",
            ResourceKind::ServiceAccount => "ServiceAccount",
            ResourceKind::Role => "Role",
            ResourceKind::RoleBinding => "RoleBinding",
            ResourceKind::ClusterRole => "ClusterRole",
            ResourceKind::ClusterRoleBinding => "ClusterRoleBinding",
            ResourceKind::MutatingWebhookConfiguration => "MutatingWebhookConfiguration",
            ResourceKind::ValidatingWebhookConfiguration => "ValidatingWebhookConfiguration",
            ResourceKind::PodSecurityPolicy => "PodSecurityPolicy",
            ResourceKind::Prometheus => "Prometheus",
            ResourceKind::Alertmanager => "Alertmanager",
            ResourceKind::ServiceMonitor => "ServiceMonitor",
        }
    }

    /// Lower-cased name, the form stored in a `KindKey`
    pub fn key(&self) -> &'static str {
        match self {
            ResourceKind::Deployment => "deployment",
            ResourceKind::ReplicaSet => "replicaset",
            ResourceKind::Pod => "pod",
            ResourceKind::DaemonSet => "daemonset",
            ResourceKind::StatefulSet => "statefulset",
            ResourceKind::Job => "job",
            ResourceKind::CronJob => "cronjob",
            ResourceKind::ReplicationController => "replicationcontroller",
            ResourceKind::Service => "service",
            ResourceKind::Ingress => "ingress",
            ResourceKind::Endpoints => "endpoints",
            ResourceKind::EndpointSlice => "endpointslice",
            ResourceKind::NetworkPolicy => "networkpolicy",
            ResourceKind::ConfigMap => "configmap",
            ResourceKind::Secret => "secret",
            ResourceKind::PersistentVolume => "persistentvolume",
            ResourceKind::PersistentVolumeClaim => "persistentvolumeclaim",
            ResourceKind::StorageClass => "storageclass",
            ResourceKind::VolumeSnapshot => "volumesnapshot",
            ResourceKind::VolumeSnapshotContent => "volumesnapshotcontent",
            ResourceKind::VolumeSnapshotClass => "volumesnapshotclass",
            ResourceKind::PodDisruptionBudget => "poddisruptionbudget",
            ResourceKind::ServiceAccount => "serviceaccount",
            ResourceKind::Role => "role",
            ResourceKind::RoleBinding => "rolebinding",
            ResourceKind::ClusterRole => "clusterrole",
            ResourceKind::ClusterRoleBinding => "clusterrolebinding",
            ResourceKind::MutatingWebhookConfiguration => "mutatingwebhookconfiguration",
            ResourceKind::ValidatingWebhookConfiguration => "validatingwebhookconfiguration",
            ResourceKind::PodSecurityPolicy => "podsecuritypolicy",
            ResourceKind::Prometheus => "prometheus",
            ResourceKind::Alertmanager => "alertmanager",
            ResourceKind::ServiceMonitor => "servicemonitor",
        }
    }

    /// Try to parse a string into a ResourceKind, returning None if invalid
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Get all well-known kinds
    pub fn all() -> &'static [Self] {
        &[
            ResourceKind::Deployment,
            ResourceKind::ReplicaSet,
            ResourceKind::Pod,
            ResourceKind::DaemonSet,
            ResourceKind::StatefulSet,
            ResourceKind::Job,
            ResourceKind::CronJob,
            ResourceKind::ReplicationController,
            ResourceKind::Service,
            ResourceKind::Ingress,
            ResourceKind::Endpoints,
            ResourceKind::EndpointSlice,
            ResourceKind::NetworkPolicy,
            ResourceKind::ConfigMap,
            ResourceKind::Secret,
            ResourceKind::PersistentVolume,
            ResourceKind::PersistentVolumeClaim,
            ResourceKind::StorageClass,
            ResourceKind::VolumeSnapshot,
            ResourceKind::VolumeSnapshotContent,
            ResourceKind::VolumeSnapshotClass,
            ResourceKind::PodDisruptionBudget,
            ResourceKind::ServiceAccount,
            ResourceKind::Role,
            ResourceKind::RoleBinding,
            ResourceKind::ClusterRole,
            ResourceKind::ClusterRoleBinding,
            ResourceKind::MutatingWebhookConfiguration,
            ResourceKind::ValidatingWebhookConfiguration,
            ResourceKind::PodSecurityPolicy,
            ResourceKind::Prometheus,
            ResourceKind::Alertmanager,
            ResourceKind::ServiceMonitor,
        ]
    }

    /// Try to parse a string (case-insensitive) into a ResourceKind
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.key() == lowered)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown resource kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_key_normalizes_case() {
        assert_eq!(KindKey::new("ReplicaSet"), KindKey::new("replicaset"));
        assert_eq!(KindKey::new(" Pod ").as_str(), "pod");
        assert!(KindKey::new("POD").is(ResourceKind::Pod));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ResourceKind::parse_optional("StatefulSet"),
            Some(ResourceKind::StatefulSet)
        );
        assert_eq!(ResourceKind::parse_optional("statefulset"), None);
        assert_eq!(ResourceKind::parse_optional("Unknown"), None);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            ResourceKind::from_str_case_insensitive("clusterrolebinding"),
            Some(ResourceKind::ClusterRoleBinding)
        );
        assert_eq!(
            ResourceKind::from_str_case_insensitive("ConfigMap"),
            Some(ResourceKind::ConfigMap)
        );
        assert_eq!(ResourceKind::from_str_case_insensitive("Kustomization"), None);
    }

    #[test]
    fn test_keys_match_display_names() {
        for kind in ResourceKind::all() {
            assert_eq!(kind.key(), kind.as_str().to_lowercase());
            assert_eq!(KindKey::from(*kind).known(), Some(*kind));
        }
    }
}
