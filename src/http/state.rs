use crate::chat::Conversation;
use crate::session::ListeningSession;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The push-to-talk listening session for this conversation
    pub session: Arc<ListeningSession>,

    /// The conversation message log
    pub conversation: Arc<RwLock<Conversation>>,
}

impl AppState {
    pub fn new(session: Arc<ListeningSession>) -> Self {
        Self {
            session,
            conversation: Arc::new(RwLock::new(Conversation::new())),
        }
    }
}
