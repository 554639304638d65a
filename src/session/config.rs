use crate::recognizer::RecognizerOptions;
use crate::transcript::MergeSemantics;
use serde::{Deserialize, Serialize};

/// Configuration for a listening session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "chat-4f1c…")
    pub session_id: String,

    /// Locale tag requested from the recognition service
    pub locale: String,

    /// Silence timeouts forwarded to the recognition service
    pub recognizer_options: RecognizerOptions,

    /// Partial-result merge semantics (platform-derived by default)
    pub merge: MergeSemantics,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("chat-{}", uuid::Uuid::new_v4()),
            locale: "en-US".to_string(),
            recognizer_options: RecognizerOptions::default(),
            merge: MergeSemantics::default(),
        }
    }
}
