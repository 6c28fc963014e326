//! TOML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from TOML string
pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse configuration from TOML string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    ::toml::from_str(content).map_err(|e| ConfigError::from_toml_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml() {
        let toml = r#"
[chunking]
max_chars = 800

[summary]
detailed = true
concurrency = 4
"#;
        let config = parse(toml).unwrap();
        assert_eq!(config.chunking.max_chars, 800);
        assert!(config.summary.detailed);
        assert_eq!(config.summary.concurrency, 4);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_parse_error_reports_path() {
        let err = parse_with_path("[chunking
max_chars = 1", Some(".repolens.toml")).unwrap_err();
        assert!(err.to_string().contains("in .repolens.toml"));
    }
}
