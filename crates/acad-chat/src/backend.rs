use acad_api::{AcademiaClient, ApiError, ChatReply, ChatRequest};
use async_trait::async_trait;

/// Where chat prompts go. Implemented by [`AcademiaClient`].
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;
}

#[async_trait]
impl ChatBackend for AcademiaClient {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.ask_llm(request).await
    }
}
