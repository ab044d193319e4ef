//! Plain-text and structured renderings of forests, roots and summaries

use crate::models::{Category, HealthStatus, ResourceNode, TopologyNode};
use crate::selection::SelectionState;
use crate::topology::{RootStatus, StatusSummary, root_name};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// How command output is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!(
                "unknown output format '{}' (expected text, json or yaml)",
                other
            )),
        }
    }
}

/// Root controller row for structured output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootEntry {
    pub path: String,
    pub name: String,
    pub status: HealthStatus,
}

impl From<&RootStatus> for RootEntry {
    fn from((path, status): &RootStatus) -> Self {
        Self {
            path: path.clone(),
            name: root_name(path).to_string(),
            status: *status,
        }
    }
}

/// Serialize any value as JSON or YAML
pub fn structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json | OutputFormat::Text => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn status_suffix(status: HealthStatus) -> String {
    if status.is_unknown() {
        String::new()
    } else {
        format!(" ({})", status)
    }
}

/// Indented tree, one node per line.
///
/// With a selection, branches not marked are shown collapsed (`+`), marked
/// ones expanded (`-`), and marked leaves are flagged with `>`. Without one,
/// every branch is expanded.
pub fn render_tree(forest: &[TopologyNode], selection: Option<&SelectionState>) -> String {
    fn render(
        out: &mut String,
        nodes: &[TopologyNode],
        depth: usize,
        selection: Option<&SelectionState>,
    ) {
        for node in nodes {
            let marked = selection.is_none_or(|s| s.contains(node.name()));
            let marker = match (node.is_leaf(), marked, selection.is_some()) {
                (false, true, _) => "- ",
                (false, false, _) => "+ ",
                (true, true, true) => "> ",
                (true, _, _) => "  ",
            };
            let _ = writeln!(
                out,
                "{}{}{}{}",
                "  ".repeat(depth),
                marker,
                node.name(),
                status_suffix(node.rolled_up_status)
            );
            if !node.is_leaf() && marked {
                render(out, node.children(), depth + 1, selection);
            }
        }
    }

    let mut out = String::new();
    render(&mut out, forest, 0, selection);
    out
}

/// One root controller per line: `{path}  {status}`
pub fn render_roots(roots: &[RootStatus]) -> String {
    let mut out = String::new();
    for (path, status) in roots {
        let status = if status.is_unknown() {
            "-"
        } else {
            status.as_str()
        };
        let _ = writeln!(out, "{}  {}", path, status);
    }
    out
}

/// One resource per line: `{kind}/{name}  {status}`
pub fn render_nodes(nodes: &[ResourceNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        let status = match node.status_label() {
            "" => "-",
            label => label,
        };
        let _ = writeln!(out, "{}/{}  {}", node.kind, node.name, status);
    }
    out
}

/// Status totals followed by per-category counts
pub fn render_summary(summary: &StatusSummary) -> String {
    fn counts_line(counts: &crate::topology::StatusCounts) -> String {
        counts
            .iter()
            .map(|(status, count)| format!("{}={}", status, count))
            .collect::<Vec<_>>()
            .join(" ")
    }

    let mut out = String::new();
    let _ = writeln!(out, "total: {}", counts_line(&summary.total));
    for category in Category::all() {
        if let Some(counts) = summary.by_category.get(category) {
            let _ = writeln!(out, "{}: {}", category, counts_line(counts));
        }
    }
    out
}
