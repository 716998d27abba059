//! Conversation state: the ordered message sequence of one chat view.

use tracing::debug;
use uuid::Uuid;

use crate::composer::SendHandler;
use crate::ids::{IdSource, ProcessIds};
use crate::message::{Message, MessageId};

/// Text of the seed messages every conversation starts with.
pub const SEED_MESSAGES: [&str; 2] = [
    "Welcome to AnonChat! Your identity is hidden.",
    "Messages are encrypted and ephemeral.",
];

/// An ordered, append-only sequence of messages.
///
/// Insertion order is display order (oldest first). The sequence is never
/// empty: it is created with the [`SEED_MESSAGES`].
#[derive(Debug)]
pub struct Conversation {
    id: Uuid,
    messages: Vec<Message>,
    ids: Box<dyn IdSource>,
}

impl Conversation {
    /// Create a conversation seeded with the welcome messages, drawing ids
    /// from the process-wide counter.
    pub fn new() -> Self {
        Self::with_id_source(ProcessIds)
    }

    /// Create a seeded conversation with an injected id source.
    pub fn with_id_source(ids: impl IdSource + 'static) -> Self {
        let messages = SEED_MESSAGES
            .iter()
            .zip(1u64..)
            .map(|(text, id)| Message::received(MessageId(id), *text))
            .collect();

        let conversation = Self {
            id: Uuid::new_v4(),
            messages,
            ids: Box::new(ids),
        };
        debug!(conversation = %conversation.id, "conversation initialized");
        conversation
    }

    /// Identifier used to correlate log events of this conversation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Append a locally-authored message.
    ///
    /// The text is stored as given; the composer has already rejected drafts
    /// that are blank after trimming.
    pub fn on_composer_send(&mut self, text: impl Into<String>) -> &Message {
        let message = Message::sent(self.ids.next_id(), text);
        debug!(
            conversation = %self.id,
            message = %message.id,
            len = message.text.len(),
            "message appended"
        );
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// All messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterate over messages in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Number of messages, seeds included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl SendHandler for Conversation {
    fn on_send(&mut self, text: String) {
        self.on_composer_send(text);
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
