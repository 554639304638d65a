use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user (typed or dictated)
    User,
    /// The remote party
    Other,
}

/// A single chat message. Immutable once appended to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message body
    pub text: String,

    /// Message author
    pub sender: Sender,

    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}
