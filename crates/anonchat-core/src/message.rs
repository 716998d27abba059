//! Message types for a chat conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a message within a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique id within the owning conversation.
    pub id: MessageId,
    /// Message content.
    pub text: String,
    /// `true` for locally-authored messages, `false` for incoming/system ones.
    pub sent: bool,
    /// When the message was created. Display only, never used for identity.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a locally-authored message.
    pub fn sent(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sent: true,
            created_at: Utc::now(),
        }
    }

    /// Create an incoming or system message.
    pub fn received(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sent: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_direction() {
        let out = Message::sent(MessageId(7), "hi");
        assert!(out.sent);
        assert_eq!(out.text, "hi");

        let incoming = Message::received(MessageId(8), "hello");
        assert!(!incoming.sent);
        assert_eq!(incoming.id, MessageId(8));
    }

    #[test]
    fn test_message_id_serializes_as_integer() {
        let msg = Message::sent(MessageId(42), "x");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["sent"], true);
    }
}
