//! Conversation session: the role-tagged message list handed to the
//! completion provider.
//!
//! Sessions are request-scoped. Each flow operation constructs a fresh
//! one, fills it with the 1–2 messages it needs and discards it after
//! the completion call, so concurrent requests can never interleave
//! their histories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Ordered message history for one completion call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationSession {
    messages: Vec<ChatMessage>,
}

impl ConversationSession {
    /// Session for the opening turn: a single user-role instruction.
    pub fn opening(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
        }
    }

    /// Session for a follow-up turn: system instruction, then the
    /// user's message, in that order.
    pub fn followup(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_session_is_single_user_message() {
        let session = ConversationSession::opening("hello");
        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].role, Role::User);
        assert_eq!(session.messages()[0].content, "hello");
    }

    #[test]
    fn test_followup_session_order() {
        let session = ConversationSession::followup("be kind", "hi");
        assert_eq!(session.len(), 2);
        assert_eq!(session.messages()[0].role, Role::System);
        assert_eq!(session.messages()[1].role, Role::User);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::system("x");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""role":"system""#));
    }
}
