use async_trait::async_trait;

/// Text-in/text-out completion service used for both summarization and
/// translation. Stateless per call; no session affinity.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiProviderError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
