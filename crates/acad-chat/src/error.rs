use acad_api::{ApiError, Endpoint};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("a reply is still pending")]
    AwaitingReply,

    #[error("unknown system prompt: {0}")]
    UnknownPrompt(String),

    #[error(transparent)]
    Backend(#[from] ApiError),
}

impl ChatError {
    /// Localized text for the chat view.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyMessage => "El mensaje no puede estar vacío".to_string(),
            Self::AwaitingReply => "Espera la respuesta del asistente.".to_string(),
            Self::UnknownPrompt(name) => format!("Prompt de sistema desconocido: {name}"),
            Self::Backend(e) => e.user_message(Endpoint::Chat),
        }
    }
}
