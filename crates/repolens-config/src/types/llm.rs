//! LLM configuration

use serde::{Deserialize, Serialize};

/// Completion endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Which wire protocol to speak
    #[serde(default)]
    pub provider: LlmProvider,

    /// Model name
    ///
    /// Examples: "gpt-4o-mini", "gpt-3.5-turbo", "qwen2.5-coder:7b"
    #[serde(default = "default_model")]
    pub model: String,

    /// Optional API base URL override
    ///
    /// Use this to point to alternative OpenAI-compatible endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// System message sent ahead of every prompt
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

/// Supported completion backends
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// OpenAI-compatible `/chat/completions`
    #[default]
    OpenAi,
    /// Local Ollama `/api/chat`
    Ollama,
}

impl LlmProvider {
    pub fn default_api_base(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "https://api.openai.com/v1",
            LlmProvider::Ollama => "http://localhost:11434",
        }
    }
}

impl LlmConfig {
    /// API base with the provider default applied
    pub fn resolved_api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| self.provider.default_api_base().to_string())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: default_model(),
            api_base: None,
            timeout_secs: default_timeout_secs(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl crate::validation::Validate for LlmConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;

        if self.model.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "llm.model".to_string(),
                message: "Model name cannot be empty".to_string(),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                field: "llm.timeout_secs".to_string(),
                message: "timeout_secs must be > 0".to_string(),
            });
        }

        if let Some(api_base) = &self.api_base {
            validate_api_base("llm.api_base", api_base)?;
        }

        Ok(())
    }
}

/// Basic URL shape check shared with profile validation
pub(crate) fn validate_api_base(field: &str, api_base: &str) -> crate::error::Result<()> {
    use crate::error::ConfigError;

    if api_base.is_empty() {
        return Err(ConfigError::ValidationError {
            field: field.to_string(),
            message: "API base URL cannot be empty string (use null to unset)".to_string(),
        });
    }

    if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            field: field.to_string(),
            message: format!(
                "API base must start with http:// or https://, got: {}",
                api_base
            ),
        });
    }

    Ok(())
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_system_prompt() -> String {
    "You are a helpful AI assistant that analyzes and explains code.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = LlmConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_model_invalid() {
        let config = LlmConfig {
            model: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let config = LlmConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_api_base() {
        let config = LlmConfig {
            api_base: Some("not-a-url".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolved_api_base_uses_provider_default() {
        let config = LlmConfig {
            provider: LlmProvider::Ollama,
            ..Default::default()
        };
        assert_eq!(config.resolved_api_base(), "http://localhost:11434");

        let config = LlmConfig {
            api_base: Some("https://llm.internal/v1".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_api_base(), "https://llm.internal/v1");
    }

    #[test]
    fn test_provider_serialization() {
        assert_eq!(
            serde_json::to_string(&LlmProvider::Ollama).unwrap(),
            "\"ollama\""
        );
    }
}
