//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{Config, Result, Validate};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default project-level config file names, in lookup order
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    ".repolens.toml",
    ".repolens.yml",
    ".repolens.yaml",
    ".repolens.json",
];

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Load from a file
    File(PathBuf),
    /// Load from environment variables
    Environment,
    /// Explicit config object (for programmatic use)
    Explicit(Config),
}

/// Builder for loading and merging configurations
///
/// Supports layered configuration with proper precedence:
/// defaults < file < environment < explicit overrides
///
/// # Example
///
/// ```no_run
/// use repolens_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".repolens.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), repolens_config::error::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    /// Create a new config builder starting with defaults
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add environment variable overlay
    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    /// Add explicit config overlay (for programmatic use)
    pub fn with_config(mut self, config: Config) -> Self {
        self.sources.push(ConfigSource::Explicit(config));
        self
    }

    /// Build and validate the final configuration
    ///
    /// Merges all sources in order, with later sources taking precedence.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    debug!(path = %path.display(), "loading config file");
                    let file_config = file::load_from_file(&path)?;
                    config = merge::merge(config, file_config);
                }
                ConfigSource::Environment => {
                    if let Some(env_config) = env::from_env()? {
                        config = merge::merge(config, env_config);
                    }
                }
                ConfigSource::Explicit(explicit_config) => {
                    config = merge::merge(config, explicit_config);
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a single file (convenience method)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        Self::new().with_file(path).build()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration from the default locations in the current directory
    ///
    /// Uses the first of [`DEFAULT_CONFIG_FILES`] that exists, then applies
    /// environment variable overlays. Without a file, defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Same as [`Config::load`], looking for config files under `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
        {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// Load configuration from a specific file
    ///
    /// Also applies environment variable overlays.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
