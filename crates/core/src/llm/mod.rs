pub mod error;
pub mod json;
pub mod openai;
pub mod prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
}

/// One chat exchange: a system message followed by a user message, returning
/// the completion text.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    fn provider(&self) -> Provider;

    async fn complete(&self, system: &str, user: &str) -> anyhow::Result<String>;
}
