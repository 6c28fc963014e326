//! YAML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from YAML string
pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse configuration from YAML string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::from_yaml_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LlmProvider;

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
llm:
  provider: ollama
  model: qwen2.5-coder:7b
chunking:
  max_chars: 2000
"#;
        let config = parse(yaml).unwrap();
        assert_eq!(config.llm.provider, LlmProvider::Ollama);
        assert_eq!(config.chunking.max_chars, 2000);
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = parse("{}").unwrap();
        assert_eq!(config.chunking.max_chars, 1500);
        assert_eq!(config.summary.concurrency, 1);
    }

    #[test]
    fn test_parse_invalid_provider_shows_location() {
        let yaml = "llm:\n  provider: anthropic\n";
        let err = parse_with_path(yaml, Some(".repolens.yml")).unwrap_err();
        assert!(err.to_string().contains("in .repolens.yml"));
    }
}
