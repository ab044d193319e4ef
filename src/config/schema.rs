//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde for serialization.

use crate::filter::{MIN_SEARCH_LENGTH, STATUS_ALL};
use crate::render::OutputFormat;
use crate::topology::MAX_OWNERSHIP_DEPTH;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Ownership tree settings
    #[serde(default)]
    pub topology: TopologyConfig,

    /// Status/name filter defaults
    #[serde(default)]
    pub filter: FilterConfig,

    /// Command output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ownership tree configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TopologyConfig {
    /// Deepest ownership level expanded before a subtree is cut off
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Filter configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    /// Shorter search terms are not applied
    #[serde(default = "default_min_search_length")]
    pub min_search_length: usize,

    /// Status tab selected when no `--status` is given
    #[serde(default = "default_status")]
    pub default_status: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Default value functions
fn default_max_depth() -> usize {
    MAX_OWNERSHIP_DEPTH
}

fn default_min_search_length() -> usize {
    MIN_SEARCH_LENGTH
}

fn default_status() -> String {
    STATUS_ALL.to_string()
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_search_length: default_min_search_length(),
            default_status: default_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.topology.max_depth, 10);
        assert_eq!(config.filter.min_search_length, 4);
        assert_eq!(config.filter.default_status, "All");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_serialization() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("maxDepth"));
        assert!(yaml.contains("minSearchLength"));
        assert!(yaml.contains("format: text"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
topology:
  maxDepth: 6
output:
  format: json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.topology.max_depth, 6);
        assert_eq!(config.filter.min_search_length, 4);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let yaml = "topology:\n  maxDepht: 6\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
