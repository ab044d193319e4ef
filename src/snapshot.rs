//! Snapshot document parsing
//!
//! Accepts the shapes the application detail API and exported fixtures use:
//! - a bare array of nodes
//! - `{ "nodes": [...] }`
//! - `{ "resourceTree": { "nodes": [...] } }`
//!
//! Node fields are accepted under both the model names (`healthStatus`,
//! `ownerRefs`) and the API names (`health.status`, `parentRefs`).

use crate::error::{Result, TopologyError};
use crate::models::{InfoItem, ResourceNode, ResourceRef};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Encoding of a snapshot document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Format implied by a file extension, if any
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("json") => Some(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Some(SnapshotFormat::Yaml),
            _ => None,
        }
    }

    /// Guess from content: JSON documents start with `[` or `{`
    pub fn sniff(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('[') | Some('{') => SnapshotFormat::Json,
            _ => SnapshotFormat::Yaml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireHealth {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNode {
    #[serde(default)]
    uid: Option<String>,
    kind: String,
    name: String,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    health_status: Option<String>,
    #[serde(default)]
    health: Option<WireHealth>,
    #[serde(default, alias = "parentRefs")]
    owner_refs: Option<Vec<ResourceRef>>,
    #[serde(default)]
    info: Option<Vec<InfoItem>>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<WireNode> for ResourceNode {
    fn from(wire: WireNode) -> Self {
        let reported = wire
            .health_status
            .or_else(|| wire.health.and_then(|h| h.status))
            .unwrap_or_default();
        let created_at = wire
            .created_at
            .as_deref()
            .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&chrono::Utc));

        let node = ResourceNode {
            uid: wire.uid.unwrap_or_default(),
            kind: wire.kind,
            name: wire.name,
            namespace: wire.namespace.unwrap_or_default(),
            group: wire.group.unwrap_or_default(),
            version: wire.version.unwrap_or_default(),
            owner_refs: wire.owner_refs.unwrap_or_default(),
            info: wire.info.unwrap_or_default(),
            created_at,
            ..Default::default()
        };
        node.with_reported_status(&reported)
    }
}

#[derive(Debug, Deserialize)]
struct NodeList {
    nodes: Vec<WireNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppDetailDocument {
    resource_tree: NodeList,
}

/// Parse a snapshot document
pub fn parse(text: &str, format: SnapshotFormat) -> Result<Vec<ResourceNode>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    // YAML is read into the JSON value model so both formats share one shape check
    let value: Value = match format {
        SnapshotFormat::Json => serde_json::from_str(text)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(text)?,
    };

    let wire: Vec<WireNode> = if value.is_array() {
        serde_json::from_value(value)?
    } else if value.get("nodes").is_some() {
        serde_json::from_value::<NodeList>(value)?.nodes
    } else if value.get("resourceTree").is_some() {
        serde_json::from_value::<AppDetailDocument>(value)?
            .resource_tree
            .nodes
    } else if value.is_null() {
        Vec::new()
    } else {
        return Err(TopologyError::UnsupportedFormat(format!(
            "expected a node array, `nodes` or `resourceTree.nodes`, found {}",
            describe(&value)
        )));
    };

    let nodes: Vec<ResourceNode> = wire.into_iter().map(ResourceNode::from).collect();
    tracing::debug!("Parsed snapshot with {} nodes", nodes.len());
    Ok(nodes)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("an object with keys [{}]", keys.join(", "))
        }
        Value::String(_) => "a string".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Array(_) | Value::Null => "an empty document".to_string(),
    }
}

/// Read and parse a snapshot file; format comes from the extension or content
pub fn load(path: &Path) -> Result<Vec<ResourceNode>> {
    let text = std::fs::read_to_string(path).map_err(|source| TopologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = SnapshotFormat::from_path(path).unwrap_or_else(|| SnapshotFormat::sniff(&text));
    parse(&text, format)
}
