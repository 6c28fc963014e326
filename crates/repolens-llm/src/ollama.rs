use crate::{Message, ProviderSettings};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use repolens_core::Completer;
use std::time::Duration;
use tracing::debug;

/// Local Ollama `/api/chat` endpoint.
pub struct OllamaProvider {
    pub model: String,
    pub base_url: String,
    pub system_prompt: String,
    pub client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(
        model: String,
        base_url: String,
        system_prompt: String,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            system_prompt,
            client,
        })
    }

    pub fn from_settings(settings: ProviderSettings) -> Result<Self> {
        Self::new(
            settings.model,
            settings.api_base,
            settings.system_prompt,
            settings.timeout_secs,
        )
    }

    pub async fn chat(&self, messages: &[Message]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false
        });

        debug!(url = %url, model = %self.model, "sending ollama chat");
        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("failed to make request to {}", url))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow!("Ollama error {}: {}", status.as_u16(), text));
        }

        let json: serde_json::Value = res.json().await.context("failed to decode response")?;
        parse_chat_response(&json)
    }
}

pub(crate) fn parse_chat_response(json: &serde_json::Value) -> Result<String> {
    if let Some(error) = json.get("error") {
        return Err(anyhow!("Ollama returned error: {}", error));
    }
    json["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow!("Invalid response format: missing message content"))
}

#[async_trait]
impl Completer for OllamaProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.chat(&[Message::system(&self.system_prompt), Message::user(prompt)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_message_content() {
        let body = json!({"model": "llama3", "message": {"role": "assistant", "content": "hello"}, "done": true});
        assert_eq!(parse_chat_response(&body).unwrap(), "hello");
    }

    #[test]
    fn test_parse_error_field() {
        let body = json!({"error": "model 'nope' not found"});
        let err = parse_chat_response(&body).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_parse_missing_content() {
        assert!(parse_chat_response(&json!({"done": true})).is_err());
    }
}
