use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Sender;

/// One line of the assistant transcript. Lives only as long as the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub const fn is_from_assistant(&self) -> bool {
        matches!(self.sender, Sender::Assistant)
    }
}
