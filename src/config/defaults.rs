//! Default configuration values

use super::schema::Config;

/// Get the default configuration
pub fn default_config() -> Config {
    Config::default()
}

/// Comment block written at the top of saved config files
pub const FILE_HEADER: &str = "# kubetree configuration\n# Keys: topology.maxDepth, filter.minSearchLength, filter.defaultStatus, output.format\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.filter.default_status, "All");
        assert!(FILE_HEADER.starts_with('#'));
    }
}
