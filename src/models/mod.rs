//! Topology model layer
//!
//! Structure:
//! - `kind.rs` - Well-known kinds and the normalized `KindKey`
//! - `health.rs` - Health statuses and the severity roll-up
//! - `category.rs` - Kind -> category catalog
//! - `resource.rs` - Flat snapshot entries and owner references
//! - `topology.rs` - Forest nodes

pub mod category;
pub mod health;
pub mod kind;
pub mod resource;
pub mod topology;

pub use category::{Category, category_of, category_of_key};
pub use health::{HealthStatus, combine, fold_statuses};
pub use kind::{KindKey, ResourceKind};
pub use resource::{InfoItem, ResourceNode, ResourceRef};
pub use topology::{TopologyNode, find_by_name};
