use super::message::{Message, Sender};
use chrono::Utc;

/// An append-only, in-memory message log for a single conversation
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Send composed text as the local user.
    ///
    /// The text is trimmed first; a whitespace-only send appends nothing
    /// and returns `None`. Otherwise exactly one message is appended and
    /// returned.
    pub fn send(&mut self, text: &str) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message = Message {
            text: text.to_string(),
            sender: Sender::User,
            timestamp: Utc::now(),
        };
        self.messages.push(message.clone());

        Some(message)
    }

    /// Append a message from the remote party
    pub fn receive(&mut self, text: impl Into<String>) -> Message {
        let message = Message {
            text: text.into(),
            sender: Sender::Other,
            timestamp: Utc::now(),
        };
        self.messages.push(message.clone());

        message
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
