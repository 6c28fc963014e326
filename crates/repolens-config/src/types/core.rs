//! Core configuration (file scanning)

use serde::{Deserialize, Serialize};

/// Core configuration for repository scanning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Glob patterns for files to include in the analysis
    ///
    /// Examples: `["**/*.rs", "**/*.py"]`
    #[serde(default = "default_include_paths")]
    pub include_paths: Vec<String>,

    /// Glob patterns for files to exclude from the analysis
    ///
    /// Examples: `["**/fixtures/**", "*.lock"]`
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Files larger than this many bytes are not read
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            include_paths: default_include_paths(),
            exclude_paths: vec![],
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

impl crate::validation::Validate for CoreConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;

        if self.include_paths.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "core.include_paths".to_string(),
                message: "Must have at least one include pattern".to_string(),
            });
        }

        for pattern in self.include_paths.iter().chain(&self.exclude_paths) {
            if pattern.is_empty() {
                return Err(ConfigError::ValidationError {
                    field: "core.include_paths".to_string(),
                    message: "Glob patterns cannot be empty strings".to_string(),
                });
            }
        }

        crate::validation::validate_positive("core.max_file_bytes", self.max_file_bytes as usize, 0)
    }
}

fn default_include_paths() -> Vec<String> {
    vec!["**/*".to_string()]
}

fn default_max_file_bytes() -> u64 {
    1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_config_is_valid() {
        let config = CoreConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_include_paths_invalid() {
        let config = CoreConfig {
            include_paths: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_exclude_pattern_invalid() {
        let config = CoreConfig {
            exclude_paths: vec![String::new()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = CoreConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: CoreConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, deserialized);
    }
}
