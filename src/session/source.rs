//! Where snapshots come from
//!
//! The store only needs "give me the current node list"; files, fixtures and
//! API clients all sit behind this trait.

use crate::error::Result;
use crate::models::ResourceNode;
use crate::snapshot;
use std::path::{Path, PathBuf};

/// Produces the current flat node list of one application
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource {
    fn fetch(&self) -> Result<Vec<ResourceNode>>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String {
        "snapshot source".to_string()
    }
}

/// Snapshot read from a JSON or YAML file on every fetch
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn fetch(&self) -> Result<Vec<ResourceNode>> {
        snapshot::load(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotSource {
    nodes: Vec<ResourceNode>,
}

impl StaticSnapshotSource {
    pub fn new(nodes: Vec<ResourceNode>) -> Self {
        Self { nodes }
    }
}

impl SnapshotSource for StaticSnapshotSource {
    fn fetch(&self) -> Result<Vec<ResourceNode>> {
        Ok(self.nodes.clone())
    }

    fn describe(&self) -> String {
        format!("{} static nodes", self.nodes.len())
    }
}
