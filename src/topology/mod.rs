//! Resource topology engine
//!
//! Pure, synchronous transformations from a flat snapshot to ownership trees,
//! root controller statuses and the categorized navigation forest.

pub mod composer;
pub mod ownership;
pub mod roots;
pub mod subtree;
pub mod summary;

pub use composer::{Composer, Forest, compose};
pub use ownership::{OwnerIndex, children_of, resolve_ref};
pub use roots::{RootStatus, pods_for_root, resolve_roots, root_name};
pub use subtree::{MAX_OWNERSHIP_DEPTH, build_subtree, build_subtree_with_depth};
pub use summary::{StatusCounts, StatusSummary};
