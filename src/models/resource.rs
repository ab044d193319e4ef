//! Flat resource snapshot types
//!
//! `ResourceNode` is one entry of the flat, unordered list the application
//! detail API returns. Owner references point from a child at its controller.

use super::health::HealthStatus;
use super::kind::{KindKey, ResourceKind};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use serde::{Deserialize, Serialize};

/// Reference from a child to the resource that controls it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    #[serde(default)]
    pub group: String,
    pub kind: String,
    pub name: String,
}

impl ResourceRef {
    pub fn new(group: &str, kind: &str, name: &str) -> Self {
        Self {
            group: group.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
        }
    }

    /// `{group}/{kind}/{name}`; group may be empty
    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.group, self.kind, self.name)
    }

    /// Ownership match: exact, case-sensitive kind and name. Group is ignored
    /// because sources populate it inconsistently on owner references.
    pub fn points_at(&self, node: &ResourceNode) -> bool {
        self.kind == node.kind && self.name == node.name
    }
}

impl From<&OwnerReference> for ResourceRef {
    fn from(owner: &OwnerReference) -> Self {
        Self {
            group: api_group(&owner.api_version).to_string(),
            kind: owner.kind.clone(),
            name: owner.name.clone(),
        }
    }
}

/// Extra display row attached to a node by the API (e.g. "Containers", "2/2")
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InfoItem {
    pub name: String,
    pub value: String,
}

/// One Kubernetes object summary from a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    #[serde(default)]
    pub uid: String,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub health_status: HealthStatus,
    /// Reported health string that has no rank (e.g. `Suspended`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reported_status: String,
    #[serde(default, alias = "parentRefs")]
    pub owner_refs: Vec<ResourceRef>,
    #[serde(default)]
    pub info: Vec<InfoItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ResourceNode {
    pub fn new(kind: &str, name: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = group.to_string();
        self
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    pub fn with_status(mut self, status: HealthStatus) -> Self {
        self.health_status = status;
        self
    }

    /// Set the status from a reported health string; unranked values are
    /// kept verbatim in `reported_status`
    pub fn with_reported_status(mut self, reported: &str) -> Self {
        self.health_status = HealthStatus::parse_lenient(reported);
        self.reported_status = if self.health_status.is_unknown() {
            reported.trim().to_string()
        } else {
            String::new()
        };
        self
    }

    /// Status text as the source reported it; empty when nothing was reported
    pub fn status_label(&self) -> &str {
        if self.reported_status.is_empty() {
            self.health_status.as_str()
        } else {
            &self.reported_status
        }
    }

    pub fn owned_by(mut self, owner: ResourceRef) -> Self {
        self.owner_refs.push(owner);
        self
    }

    pub fn kind_key(&self) -> KindKey {
        KindKey::new(&self.kind)
    }

    pub fn is_kind(&self, kind: ResourceKind) -> bool {
        self.kind_key().is(kind)
    }

    /// Reference that a child would carry to point at this node
    pub fn to_ref(&self) -> ResourceRef {
        ResourceRef::new(&self.group, &self.kind, &self.name)
    }

    /// `{group}/{kind}/{name}` for this node
    pub fn path(&self) -> String {
        self.to_ref().path()
    }

    /// Value of a named info row, if present
    pub fn info_value(&self, name: &str) -> Option<&str> {
        self.info
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.value.as_str())
    }

    /// Build a node from Kubernetes object metadata
    pub fn from_metadata(kind: &str, api_version: &str, meta: &ObjectMeta) -> Self {
        let owner_refs = meta
            .owner_references
            .as_ref()
            .map(|owners| owners.iter().map(ResourceRef::from).collect())
            .unwrap_or_default();

        Self {
            uid: meta.uid.clone().unwrap_or_default(),
            kind: kind.to_string(),
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone().unwrap_or_default(),
            group: api_group(api_version).to_string(),
            version: api_version_only(api_version).to_string(),
            health_status: HealthStatus::Unknown,
            reported_status: String::new(),
            owner_refs,
            info: Vec::new(),
            created_at: None,
        }
    }
}

/// API group portion of an apiVersion (`apps/v1` -> `apps`, `v1` -> ``)
pub fn api_group(api_version: &str) -> &str {
    api_version
        .rsplit_once('/')
        .map(|(group, _)| group)
        .unwrap_or("")
}

fn api_version_only(api_version: &str) -> &str {
    api_version
        .rsplit_once('/')
        .map(|(_, version)| version)
        .unwrap_or(api_version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_path() {
        let owner = ResourceRef::new("apps", "ReplicaSet", "web-5d9f");
        assert_eq!(owner.path(), "apps/ReplicaSet/web-5d9f");
        assert_eq!(ResourceRef::new("", "Service", "web").path(), "/Service/web");
    }

    #[test]
    fn test_points_at_ignores_group() {
        let node = ResourceNode::new("ReplicaSet", "web-5d9f").with_group("apps");
        assert!(ResourceRef::new("", "ReplicaSet", "web-5d9f").points_at(&node));
        assert!(!ResourceRef::new("apps", "replicaset", "web-5d9f").points_at(&node));
        assert!(!ResourceRef::new("apps", "ReplicaSet", "Web-5d9f").points_at(&node));
    }

    #[test]
    fn test_reported_status_kept_only_when_unranked() {
        let node = ResourceNode::new("CronJob", "backup").with_reported_status("Suspended");
        assert!(node.health_status.is_unknown());
        assert_eq!(node.status_label(), "Suspended");

        let node = ResourceNode::new("Pod", "web").with_reported_status("DEGRADED");
        assert_eq!(node.health_status, HealthStatus::Degraded);
        assert_eq!(node.status_label(), "degraded");

        assert_eq!(ResourceNode::new("ConfigMap", "settings").status_label(), "");
    }

    #[test]
    fn test_api_group() {
        assert_eq!(api_group("apps/v1"), "apps");
        assert_eq!(api_group("v1"), "");
        assert_eq!(api_group("monitoring.coreos.com/v1"), "monitoring.coreos.com");
    }

    #[test]
    fn test_from_metadata() {
        let meta = ObjectMeta {
            name: Some("web-5d9f-abcde".to_string()),
            namespace: Some("default".to_string()),
            uid: Some("uid-1".to_string()),
            owner_references: Some(vec![OwnerReference {
                api_version: "apps/v1".to_string(),
                kind: "ReplicaSet".to_string(),
                name: "web-5d9f".to_string(),
                uid: "uid-rs".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let node = ResourceNode::from_metadata("Pod", "v1", &meta);
        assert_eq!(node.name, "web-5d9f-abcde");
        assert_eq!(node.group, "");
        assert_eq!(node.version, "v1");
        assert_eq!(
            node.owner_refs,
            vec![ResourceRef::new("apps", "ReplicaSet", "web-5d9f")]
        );
    }

    #[test]
    fn test_deserialize_accepts_parent_refs_alias() {
        let json = r#"{
            "kind": "Pod",
            "name": "web-1",
            "healthStatus": "Healthy",
            "parentRefs": [{"group": "apps", "kind": "ReplicaSet", "name": "web"}]
        }"#;
        let node: ResourceNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.health_status, HealthStatus::Healthy);
        assert_eq!(node.owner_refs.len(), 1);
        assert!(node.is_kind(ResourceKind::Pod));
    }
}
