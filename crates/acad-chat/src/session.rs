//! The assistant conversation.
//!
//! A session is an append-only transcript plus the backend conversation id.
//! Sending is split into [`ChatSession::begin`] and [`ChatSession::finish`]
//! so a front end can render the awaiting-reply state between them;
//! [`ChatSession::send`] runs both around one backend call.

use std::time::Duration;

use acad_api::{ApiError, ChatReply, ChatRequest, ModelOptions};
use acad_config::ChatConfig;
use acad_core::entities::ChatMessage;
use acad_core::enums::Sender;
use acad_core::routes::Route;
use serde::Serialize;

use crate::{ChatBackend, ChatError, SystemPrompt, recommendation};

/// First assistant message of every opened session.
pub const WELCOME_MESSAGE: &str = "¡Hola! Soy tu asistente virtual para encontrar tu carrera ideal. \
Cuéntame sobre tus intereses académicos o pregúntame sobre alguna carrera específica.";

/// Appended when a turn fails.
pub const APOLOGY_MESSAGE: &str =
    "Lo siento, ha ocurrido un error al procesar tu solicitud. Por favor, intenta de nuevo.";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub model_id: String,
    pub temperature: f32,
    pub system_prompt: SystemPrompt,
    /// Pause before a recommendation forwards to search.
    pub redirect_delay: Duration,
}

impl ChatSettings {
    /// # Errors
    ///
    /// [`ChatError::UnknownPrompt`] if `system_prompt` names no preset.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        Ok(Self {
            model_id: config.model_id.clone(),
            temperature: config.temperature,
            system_prompt: SystemPrompt::parse(&config.system_prompt)?,
            redirect_delay: Duration::from_millis(config.redirect_delay_ms),
        })
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        let config = ChatConfig::default();
        Self {
            model_id: config.model_id,
            temperature: config.temperature,
            system_prompt: SystemPrompt::default(),
            redirect_delay: Duration::from_millis(config.redirect_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingReply,
}

/// A search the session will forward to once the delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingForward {
    pub query: String,
    pub delay: Duration,
}

impl PendingForward {
    #[must_use]
    pub fn route(&self) -> Route {
        Route::Search {
            query: Some(self.query.clone()),
        }
    }
}

/// Result of one successful turn.
#[derive(Debug, Clone, PartialEq)]
pub struct SendOutcome {
    /// Assistant reply as displayed, token line removed.
    pub reply: ChatMessage,
    /// The recommendation message, when the reply carried one.
    pub recommendation: Option<ChatMessage>,
    pub forward: Option<PendingForward>,
}

pub struct ChatSession<'a, B: ChatBackend + ?Sized> {
    backend: &'a B,
    settings: ChatSettings,
    messages: Vec<ChatMessage>,
    conversation_id: Option<String>,
    /// Query of the latest recommendation message, for "Buscar esto".
    offered_query: Option<String>,
    state: SessionState,
    next_id: u64,
}

impl<'a, B: ChatBackend + ?Sized> ChatSession<'a, B> {
    pub const fn new(backend: &'a B, settings: ChatSettings) -> Self {
        Self {
            backend,
            settings,
            messages: Vec::new(),
            conversation_id: None,
            offered_query: None,
            state: SessionState::Idle,
            next_id: 1,
        }
    }

    /// Seed the welcome message if the transcript is empty.
    pub fn open(&mut self) {
        if self.messages.is_empty() {
            self.push(WELCOME_MESSAGE, Sender::Assistant);
        }
    }

    /// Record the user's message and build the request for it.
    ///
    /// # Errors
    ///
    /// [`ChatError::EmptyMessage`] for blank text, or
    /// [`ChatError::AwaitingReply`] while a previous turn is unfinished.
    pub fn begin(&mut self, text: &str) -> Result<ChatRequest, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.state == SessionState::AwaitingReply {
            return Err(ChatError::AwaitingReply);
        }
        self.push(text, Sender::User);
        self.state = SessionState::AwaitingReply;
        Ok(ChatRequest {
            prompt: text.to_string(),
            system_prompt: self.settings.system_prompt.text().to_string(),
            conversation_id: self.conversation_id.clone(),
            model_options: ModelOptions {
                temperature: self.settings.temperature,
                model_id: self.settings.model_id.clone(),
            },
        })
    }

    /// Apply the backend result of the turn opened by [`Self::begin`].
    ///
    /// # Errors
    ///
    /// [`ChatError::Backend`] when `result` is an error; the apology message
    /// has already been appended.
    pub fn finish(&mut self, result: Result<ChatReply, ApiError>) -> Result<SendOutcome, ChatError> {
        self.state = SessionState::Idle;
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(%e, "assistant turn failed");
                self.push(APOLOGY_MESSAGE, Sender::Assistant);
                return Err(e.into());
            }
        };

        if reply.conversation_id.is_some() {
            self.conversation_id.clone_from(&reply.conversation_id);
        }

        let query = recommendation::extract(&reply.text).or_else(|| {
            reply
                .search_recommendation
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(String::from)
        });

        let Some(query) = query else {
            let reply = self.push(&recommendation::strip(&reply.text), Sender::Assistant);
            return Ok(SendOutcome {
                reply,
                recommendation: None,
                forward: None,
            });
        };

        tracing::debug!(%query, "assistant recommended a search");
        let reply = self.push(&recommendation::strip(&reply.text), Sender::Assistant);
        let offer = self.push(&recommendation::message(&query), Sender::Assistant);
        self.offered_query = Some(query.clone());
        Ok(SendOutcome {
            reply,
            recommendation: Some(offer),
            forward: Some(PendingForward {
                query,
                delay: self.settings.redirect_delay,
            }),
        })
    }

    /// Run one full turn against the backend.
    ///
    /// # Errors
    ///
    /// See [`Self::begin`] and [`Self::finish`].
    pub async fn send(&mut self, text: &str) -> Result<SendOutcome, ChatError> {
        let request = self.begin(text)?;
        let result = self.backend.ask(&request).await;
        self.finish(result)
    }

    /// Wait out the forward delay, close, and return the search route.
    pub async fn follow(&mut self, pending: PendingForward) -> Route {
        tokio::time::sleep(pending.delay).await;
        self.close();
        pending.route()
    }

    /// The "Buscar esto" action on the latest recommendation message.
    ///
    /// Closes the session and returns the search route, or `None` if no
    /// search has been offered since the session was opened.
    pub fn accept_recommendation(&mut self) -> Option<Route> {
        let query = self.offered_query.take()?;
        self.close();
        Some(Route::Search { query: Some(query) })
    }

    /// Discard the transcript and conversation id.
    pub fn close(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.offered_query = None;
        self.state = SessionState::Idle;
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    #[must_use]
    pub const fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    fn push(&mut self, text: &str, sender: Sender) -> ChatMessage {
        let message = ChatMessage::new(format!("msg-{}", self.next_id), text, sender);
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}
