//! Status / name filter applied to the flat list before composing
//!
//! Callers own the search deferral policy: search terms shorter than
//! `MIN_SEARCH_LENGTH` should not be applied yet (see `NodeFilter::effective`).

use crate::models::ResourceNode;
use serde::{Deserialize, Serialize};

/// Status filter value that matches everything
pub const STATUS_ALL: &str = "All";

/// Shortest search term the UI applies
pub const MIN_SEARCH_LENGTH: usize = 4;

/// Filter state coming from the search box and status tabs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeFilter {
    #[serde(default)]
    pub status_type: String,
    #[serde(default)]
    pub search_term: String,
}

impl NodeFilter {
    pub fn new(status_type: &str, search_term: &str) -> Self {
        Self {
            status_type: status_type.to_string(),
            search_term: search_term.to_string(),
        }
    }

    pub fn status(status_type: &str) -> Self {
        Self::new(status_type, "")
    }

    pub fn search(search_term: &str) -> Self {
        Self::new("", search_term)
    }

    /// True when neither the status nor the search term restricts anything
    pub fn is_empty(&self) -> bool {
        self.matches_all_statuses() && self.search_term.is_empty()
    }

    pub fn matches_all_statuses(&self) -> bool {
        self.status_type.is_empty() || self.status_type.eq_ignore_ascii_case(STATUS_ALL)
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Copy with a too-short search term dropped (not yet filtering)
    pub fn effective(&self, min_search_length: usize) -> Self {
        let mut effective = self.clone();
        if effective.search_term.chars().count() < min_search_length {
            effective.search_term.clear();
        }
        effective
    }
}

/// Whether a node passes the filter.
///
/// Status compares case-insensitively against the reported status, so an
/// unranked value such as `Suspended` only matches its own tab. A node that
/// reported nothing counts as healthy. The search term is a plain substring
/// test on the node name.
pub fn matches(node: &ResourceNode, filter: &NodeFilter) -> bool {
    let status_ok = filter.matches_all_statuses() || {
        let node_status = match node.status_label() {
            "" => "healthy",
            label => label,
        };
        filter.status_type.eq_ignore_ascii_case(node_status)
    };

    status_ok && (filter.search_term.is_empty() || node.name.contains(&filter.search_term))
}

/// Nodes passing the filter, in input order
pub fn apply(nodes: &[ResourceNode], filter: &NodeFilter) -> Vec<ResourceNode> {
    if filter.is_empty() {
        return nodes.to_vec();
    }
    nodes.iter().filter(|n| matches(n, filter)).cloned().collect()
}
