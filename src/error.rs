//! Error types for the fallible edges of the crate
//!
//! The topology engine itself never fails; errors only arise when reading
//! snapshots or configuration from outside.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading snapshots and configuration
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TopologyError {
    /// IO errors with the path involved
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document parsed but is not one of the supported snapshot shapes
    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A snapshot source could not produce a snapshot
    #[error("Snapshot source failed: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, TopologyError>;
