//! Status counters for the dashboard's status chips
//!
//! Counts nodes per status overall, per kind and per category. Nodes without
//! a status are not counted.

use crate::models::{Category, HealthStatus, KindKey, ResourceNode, category_of_key};
use serde::Serialize;
use std::collections::BTreeMap;

pub type StatusCounts = BTreeMap<HealthStatus, usize>;

/// Status counts over one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub total: StatusCounts,
    pub by_kind: BTreeMap<KindKey, StatusCounts>,
    pub by_category: BTreeMap<Category, StatusCounts>,
}

impl StatusSummary {
    pub fn from_nodes(nodes: &[ResourceNode]) -> Self {
        let mut summary = Self::default();
        for node in nodes.iter().filter(|n| !n.health_status.is_unknown()) {
            let status = node.health_status;
            let kind = node.kind_key();
            let category = category_of_key(&kind);

            *summary.total.entry(status).or_insert(0) += 1;
            *summary
                .by_kind
                .entry(kind)
                .or_default()
                .entry(status)
                .or_insert(0) += 1;
            *summary
                .by_category
                .entry(category)
                .or_default()
                .entry(status)
                .or_insert(0) += 1;
        }
        summary
    }

    /// Count of one status across the snapshot
    pub fn count(&self, status: HealthStatus) -> usize {
        self.total.get(&status).copied().unwrap_or(0)
    }

    /// Count of one status for a kind (case-insensitive)
    pub fn count_for_kind(&self, kind: &str, status: HealthStatus) -> usize {
        self.by_kind
            .get(&KindKey::new(kind))
            .and_then(|counts| counts.get(&status))
            .copied()
            .unwrap_or(0)
    }

    /// Number of nodes carrying a status
    pub fn counted(&self) -> usize {
        self.total.values().sum()
    }
}
