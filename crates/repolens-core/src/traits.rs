use anyhow::Result;
use async_trait::async_trait;

/// A text completion endpoint: one prompt in, one response out.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
