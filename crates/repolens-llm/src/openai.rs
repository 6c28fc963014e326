use crate::{Message, ProviderSettings};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use repolens_core::Completer;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiProvider {
    pub model: String,
    pub api_key: String,
    pub api_base: String,
    pub system_prompt: String,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    pub fn new(
        model: String,
        api_key: String,
        api_base: String,
        system_prompt: String,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            model,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            system_prompt,
            client,
        })
    }

    pub fn from_settings(settings: ProviderSettings) -> Result<Self> {
        Self::new(
            settings.model,
            settings.api_key.unwrap_or_default(),
            settings.api_base,
            settings.system_prompt,
            settings.timeout_secs,
        )
    }

    pub async fn chat(&self, messages: &[Message]) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
        });

        debug!(url = %url, model = %self.model, "sending chat completion");
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("failed to make request to {}", url))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow!(
                "API request failed with status {}: {}",
                status.as_u16(),
                text
            ));
        }

        let text = res.text().await.context("failed to read response body")?;
        parse_chat_response(&text)
    }
}

/// Extract the first choice's content from a chat completion body.
pub(crate) fn parse_chat_response(body: &str) -> Result<String> {
    let parsed: ChatResponse =
        serde_json::from_str(body).context("failed to decode response")?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no response choices returned"))?;
    Ok(choice.message.content.unwrap_or_default())
}

#[async_trait]
impl Completer for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.chat(&[Message::system(&self.system_prompt), Message::user(prompt)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"first"}},{"message":{"content":"second"}}]}"#;
        assert_eq!(parse_chat_response(body).unwrap(), "first");
    }

    #[test]
    fn test_parse_no_choices() {
        let err = parse_chat_response(r#"{"choices":[]}"#).unwrap_err();
        assert_eq!(err.to_string(), "no response choices returned");
        assert!(parse_chat_response(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_chat_response("<html>").is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = OpenAiProvider::new(
            "m".to_string(),
            "k".to_string(),
            "https://api.openai.com/v1/".to_string(),
            "sys".to_string(),
            5,
        )
        .unwrap();
        assert_eq!(provider.api_base, "https://api.openai.com/v1");
    }
}
