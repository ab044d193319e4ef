//! Configuration loading and merging logic
//!
//! Precedence order (highest to lowest):
//! 1. Environment variable overrides
//! 2. Root config file
//! 3. Built-in defaults

use super::{defaults, paths, schema::Config};
use crate::error::TopologyError;
use crate::render::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Overrides `topology.maxDepth`
pub const MAX_DEPTH_ENV: &str = "KUBETREE_MAX_DEPTH";
/// Overrides `output.format`
pub const OUTPUT_ENV: &str = "KUBETREE_OUTPUT";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::root_config_path())
    }

    /// Load with `path` as the root config file (missing file means defaults)
    pub fn load_from(path: &Path) -> Result<Config> {
        let mut config = Self::load_defaults();

        if path.exists() {
            config = Self::load_file(path)?;
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
        }

        let config = Self::apply_env_overrides(config, |key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Strict validation of the root config file and the merged result
    pub fn validate() -> Result<()> {
        let root_path = paths::root_config_path();
        if root_path.exists() {
            Self::load_file(&root_path)?.validate()?;
        }
        Self::load().context("Failed to load merged configuration")?;
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides; unparsable values are ignored
    fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MAX_DEPTH_ENV) {
            match value.parse::<usize>() {
                Ok(depth) => config.topology.max_depth = depth,
                Err(_) => tracing::warn!("Ignoring {}={:?}: not a number", MAX_DEPTH_ENV, value),
            }
        }

        if let Some(value) = lookup(OUTPUT_ENV) {
            match value.parse::<OutputFormat>() {
                Ok(format) => config.output.format = format,
                Err(e) => tracing::warn!("Ignoring {}: {}", OUTPUT_ENV, e),
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, format!("{}{}", defaults::FILE_HEADER, yaml))
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}

impl Config {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.topology.max_depth == 0 {
            return Err(TopologyError::Config(
                "topology.maxDepth must be at least 1".to_string(),
            ));
        }

        let status = &self.filter.default_status;
        let known_status = status.eq_ignore_ascii_case(crate::filter::STATUS_ALL)
            || !crate::models::HealthStatus::parse_lenient(status).is_unknown();
        if !known_status {
            return Err(TopologyError::Config(format!(
                "filter.defaultStatus '{}' is not All, healthy, degraded, progressing or missing",
                status
            )));
        }
        Ok(())
    }
}
