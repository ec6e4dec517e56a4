// src/config/kit_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Runtime settings for the contest templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitConfig {
    /// Problem name; `<problem>.in` / `<problem>.out` are used when non-empty
    pub problem: String,

    /// Read a test-case count before solving
    pub multi_test: bool,

    /// Directory holding the problem files
    pub working_dir: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for KitConfig {
    fn default() -> Self {
        KitConfig {
            problem: String::new(),
            multi_test: false,
            working_dir: ".".to_string(),
            // stdout may be the judged output, keep the logger quiet
            log_level: "warn".to_string(),
        }
    }
}

impl KitConfig {
    /// Load configuration with precedence: defaults → usaco.toml → env vars
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file("usaco.toml")
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: USACO_)
        builder = builder.add_source(
            Environment::with_prefix("USACO")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Same as [`KitConfig::load_from_file`] without the environment layer
    pub fn from_file_only<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }
        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = KitConfig::default();
        Config::builder()
            .set_default("problem", defaults.problem)?
            .set_default("multi_test", defaults.multi_test)?
            .set_default("working_dir", defaults.working_dir)?
            .set_default("log_level", defaults.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = KitConfig::default();
        assert_eq!(config.problem, "");
        assert!(!config.multi_test);
        assert_eq!(config.working_dir, ".");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = KitConfig::from_file_only(dir.path().join("usaco.toml")).unwrap();
        assert_eq!(config.problem, "");
        assert_eq!(config.working_dir, ".");
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usaco.toml");
        fs::write(&path, "problem = \"cowdance\"\nmulti_test = true\n").unwrap();

        let config = KitConfig::from_file_only(&path).unwrap();
        assert_eq!(config.problem, "cowdance");
        assert!(config.multi_test);
        assert_eq!(config.log_level, "warn");
    }

    // The only test touching USACO_* variables, so parallel tests never see them
    #[test]
    fn test_env_overrides_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usaco.toml");
        fs::write(&path, "problem = \"fromfile\"\nlog_level = \"info\"\n").unwrap();

        std::env::set_var("USACO_PROBLEM", "cowdance");
        std::env::set_var("USACO_MULTI_TEST", "true");
        let loaded = KitConfig::load_from_file(&path);
        std::env::remove_var("USACO_PROBLEM");
        std::env::remove_var("USACO_MULTI_TEST");

        let config = loaded.unwrap();
        assert_eq!(config.problem, "cowdance");
        assert!(config.multi_test);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.working_dir, ".");
    }
}
