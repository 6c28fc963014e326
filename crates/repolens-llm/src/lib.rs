//! Completion endpoints behind [`repolens_core::Completer`].

mod ollama;
mod openai;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use anyhow::{anyhow, Result};
use repolens_config::{LlmConfig, LlmProvider, Profile};
use repolens_core::Completer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Endpoint settings after applying a profile over the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub provider: LlmProvider,
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: String,
    pub system_prompt: String,
    pub timeout_secs: u64,
}

impl ProviderSettings {
    /// Profile fields win over config fields; `env_key` is the fallback API key.
    pub fn resolve(
        config: &LlmConfig,
        profile: Option<&Profile>,
        env_key: Option<String>,
    ) -> Result<Self> {
        let api_base = profile
            .map(|p| p.api_base.clone())
            .unwrap_or_else(|| config.resolved_api_base());
        let model = profile
            .map(|p| p.model.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| config.model.clone());
        let api_key = profile
            .map(|p| p.api_key.clone())
            .filter(|k| !k.is_empty())
            .or_else(|| env_key.filter(|k| !k.is_empty()));

        if config.provider == LlmProvider::OpenAi && api_key.is_none() {
            return Err(anyhow!(
                "API key is required: add a profile with 'repolens config add-profile' or set OPENAI_API_KEY"
            ));
        }

        Ok(Self {
            provider: config.provider,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model,
            system_prompt: config.system_prompt.clone(),
            timeout_secs: config.timeout_secs,
        })
    }
}

/// Build the completer selected by `config`, with `profile` applied.
pub fn build_completer(config: &LlmConfig, profile: Option<&Profile>) -> Result<Arc<dyn Completer>> {
    let settings =
        ProviderSettings::resolve(config, profile, std::env::var("OPENAI_API_KEY").ok())?;
    debug!(
        provider = ?settings.provider,
        model = %settings.model,
        api_base = %settings.api_base,
        "building completer"
    );

    Ok(match settings.provider {
        LlmProvider::OpenAi => Arc::new(OpenAiProvider::from_settings(settings)?),
        LlmProvider::Ollama => Arc::new(OllamaProvider::from_settings(settings)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            api_base: "https://llm.example.com/v1/".to_string(),
            api_key: "sk-profile".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    #[test]
    fn test_profile_overrides_config() {
        let settings =
            ProviderSettings::resolve(&LlmConfig::default(), Some(&profile()), None).unwrap();
        assert_eq!(settings.api_base, "https://llm.example.com/v1");
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.api_key.as_deref(), Some("sk-profile"));
    }

    #[test]
    fn test_env_key_fallback() {
        let settings =
            ProviderSettings::resolve(&LlmConfig::default(), None, Some("sk-env".to_string()))
                .unwrap();
        assert_eq!(settings.api_base, "https://api.openai.com/v1");
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.api_key.as_deref(), Some("sk-env"));
    }

    #[test]
    fn test_empty_profile_key_falls_back_to_env() {
        let profile = Profile {
            api_key: String::new(),
            ..profile()
        };
        let settings = ProviderSettings::resolve(
            &LlmConfig::default(),
            Some(&profile),
            Some("sk-env".to_string()),
        )
        .unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("sk-env"));
        assert_eq!(settings.model, "gpt-4o-mini");

        let err = ProviderSettings::resolve(
            &LlmConfig::default(),
            Some(&profile),
            Some(String::new()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("API key is required"));
    }

    #[test]
    fn test_openai_requires_key() {
        let err = ProviderSettings::resolve(&LlmConfig::default(), None, None).unwrap_err();
        assert!(err.to_string().contains("API key is required"));
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let config = LlmConfig {
            provider: LlmProvider::Ollama,
            model: "llama3".to_string(),
            ..LlmConfig::default()
        };
        let settings = ProviderSettings::resolve(&config, None, None).unwrap();
        assert_eq!(settings.api_base, "http://localhost:11434");
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
