//! JSON format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from JSON string
pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse configuration from JSON string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    serde_json::from_str(content).map_err(|e| ConfigError::from_json_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_json() {
        let json = r#" {
            "core": {
                "exclude_paths": ["**/testdata/**"]
            },
            "llm": {
                "model": "gpt-4o-mini",
                "api_base": "https://llm.example.com/v1"
            }
        }"#;
        let config = parse(json).unwrap();
        assert_eq!(config.core.exclude_paths, vec!["**/testdata/**".to_string()]);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(
            config.llm.api_base.as_deref(),
            Some("https://llm.example.com/v1")
        );
    }
}
