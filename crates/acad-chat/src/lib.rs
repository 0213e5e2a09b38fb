//! # acad-chat
//!
//! The assistant modal as a library:
//!
//! - [`ChatSession`]: append-only transcript with idle/awaiting-reply
//!   states, welcome message, conversation id, and auto-forward to search
//!   when a reply carries a recommendation
//! - [`recommendation`]: the `BÚSQUEDA_RECOMENDADA:` token and the
//!   "Buscar esto" message format
//! - [`SystemPrompt`]: the prompt library sent as `system_prompt`
//! - [`assist`]: one-off helper prompts (search query, topic extraction)

pub mod assist;
mod backend;
mod error;
mod prompts;
pub mod recommendation;
mod session;

pub use backend::ChatBackend;
pub use error::ChatError;
pub use prompts::SystemPrompt;
pub use session::{
    APOLOGY_MESSAGE, ChatSession, ChatSettings, PendingForward, SendOutcome, SessionState,
    WELCOME_MESSAGE,
};
