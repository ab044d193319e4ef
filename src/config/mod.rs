//! Configuration for kubetree
//!
//! A single YAML file layered over built-in defaults, with environment
//! variable overrides on top.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, FilterConfig, OutputConfig, TopologyConfig};

use crate::session::SessionSettings;

/// Every key accepted by `get_config_value` / `set_config_value`
pub const CONFIG_KEYS: &[&str] = &[
    "topology.maxDepth",
    "filter.minSearchLength",
    "filter.defaultStatus",
    "output.format",
];

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "topology.maxDepth" => Ok(config.topology.max_depth.to_string()),
        "filter.minSearchLength" => Ok(config.filter.min_search_length.to_string()),
        "filter.defaultStatus" => Ok(config.filter.default_status.clone()),
        "output.format" => Ok(config.output.format.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "topology.maxDepth" => {
            config.topology.max_depth = value
                .parse()
                .context("topology.maxDepth must be a number")?;
        }
        "filter.minSearchLength" => {
            config.filter.min_search_length = value
                .parse()
                .context("filter.minSearchLength must be a number")?;
        }
        "filter.defaultStatus" => {
            config.filter.default_status = value.to_string();
        }
        "output.format" => {
            config.output.format = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
    config.validate()?;
    Ok(())
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_depth: config.topology.max_depth,
            min_search_length: config.filter.min_search_length,
        }
    }
}
