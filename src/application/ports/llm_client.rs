use async_trait::async_trait;

/// The external text-generation collaborator: one prompt in, one completion
/// out. Treated as unreliable in output format but not defensively wrapped
/// beyond the parse-failure paths in the callers.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
