//! Chat assistant proxy (`POST /ask-llm`).

use serde::{Deserialize, Serialize};

use crate::{
    AcademiaClient, Endpoint,
    error::ApiError,
    http::{decode, send},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelOptions {
    pub temperature: f32,
    #[serde(rename = "modelId")]
    pub model_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub prompt: String,
    /// May be empty for one-off helper prompts.
    pub system_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub model_options: ModelOptions,
}

/// Assistant reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(rename = "resp", default)]
    pub text: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub message_count: Option<u32>,
    #[serde(default)]
    pub search_recommendation: Option<String>,
}

impl AcademiaClient {
    /// Send one prompt to the assistant.
    ///
    /// Uses the longer chat timeout from config instead of the client default.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyPrompt`] for a blank prompt without sending
    /// anything, otherwise any transport/status/parse failure.
    pub async fn ask_llm(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        if request.prompt.trim().is_empty() {
            return Err(ApiError::EmptyPrompt);
        }
        let url = self.url(Endpoint::Chat.path());
        tracing::debug!(
            conversation_id = request.conversation_id.as_deref().unwrap_or("-"),
            "asking assistant"
        );
        let started = std::time::Instant::now();
        let reply: ChatReply = decode(
            send(self.http.post(&url).timeout(self.chat_timeout).json(request)).await?,
        )
        .await?;
        tracing::debug!(elapsed_ms = started.elapsed().as_millis(), "assistant replied");
        Ok(reply)
    }
}
