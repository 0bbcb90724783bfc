//! Outbound chat messages
//!
//! The dialog engine produces these synchronously; delivery to the user is
//! the caller's responsibility (terminal, HTTP handler, whatever the host
//! environment needs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who a chat message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message produced by the assistant.
    Bot,
    /// Message echoed back from the user (menu selections).
    User,
}

/// A single message to be shown in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub role: MessageRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl OutboundMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Bot,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.role == MessageRole::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_constructor() {
        let msg = OutboundMessage::bot("Olá!");
        assert_eq!(msg.role, MessageRole::Bot);
        assert_eq!(msg.text, "Olá!");
        assert!(msg.is_bot());
    }

    #[test]
    fn test_user_constructor() {
        let msg = OutboundMessage::user("Consultar Frete");
        assert_eq!(msg.role, MessageRole::User);
        assert!(!msg.is_bot());
    }
}
