//! Resource topology and status aggregation engine
//!
//! Turns the flat resource list of a deployed application into the views an
//! application dashboard needs: pod root controllers with rolled-up health,
//! ownership subtrees per kind, the categorized navigation forest, selection
//! state over that forest, and status/name filtering.
//!
//! Everything under `models`, `topology`, `selection` and `filter` is pure and
//! deterministic; `session` wraps it in a thread-safe store.

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod render;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod topology;

// Re-export commonly used types for convenience
pub use error::{Result, TopologyError};
pub use filter::{NodeFilter, matches};
pub use models::{Category, HealthStatus, ResourceNode, ResourceRef, TopologyNode, combine};
pub use selection::{SelectionState, recompute};
pub use session::{SnapshotSource, TopologyStore};
pub use topology::{build_subtree, compose, resolve_roots};
