use super::state::AppState;
use crate::chat::Message;
use crate::session::{ListeningState, SessionStats};
use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ListenResponse {
    pub state: ListeningState,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub state: ListeningState,
    pub stats: SessionStats,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct SetTranscriptRequest {
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub sent: bool,
    pub message: Option<Message>,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "voxchat"
    }))
}

/// POST /chat/listen/start
/// Push-to-talk pressed: begin a capture
pub async fn start_listening(State(state): State<AppState>) -> impl IntoResponse {
    info!("Push-to-talk pressed");

    if let Err(e) = state.session.start().await {
        error!("Failed to start listening: {:#}", e);
    }

    // A failed recognizer start is not a user-facing error: the session
    // simply reports that it stayed idle.
    let listening_state = state.session.state();
    let message = match listening_state {
        ListeningState::Listening => "listening".to_string(),
        ListeningState::Idle => "recognizer unavailable, session idle".to_string(),
    };

    Json(ListenResponse {
        state: listening_state,
        message,
    })
}

/// POST /chat/listen/stop
/// Push-to-talk released: end the capture
pub async fn stop_listening(State(state): State<AppState>) -> impl IntoResponse {
    info!("Push-to-talk released");

    if let Err(e) = state.session.stop().await {
        error!("Failed to stop listening: {:#}", e);
    }

    Json(ListenResponse {
        state: state.session.state(),
        message: "stopped".to_string(),
    })
}

/// GET /chat/status
/// Listening state and session statistics
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.session.stats().await;

    Json(StatusResponse {
        state: state.session.state(),
        stats,
    })
}

/// GET /chat/transcript
/// The live composer value (updates while listening)
pub async fn get_transcript(State(state): State<AppState>) -> impl IntoResponse {
    Json(TranscriptResponse {
        transcript: state.session.transcript().await,
    })
}

/// PUT /chat/transcript
/// Replace the composer value (user edit)
pub async fn set_transcript(
    State(state): State<AppState>,
    Json(req): Json<SetTranscriptRequest>,
) -> impl IntoResponse {
    state.session.set_transcript(req.transcript).await;

    Json(TranscriptResponse {
        transcript: state.session.transcript().await,
    })
}

/// POST /chat/send
/// Send the current composer value; empty or whitespace-only text is a no-op
pub async fn send_message(State(state): State<AppState>) -> impl IntoResponse {
    let text = state.session.transcript().await;

    let sent = {
        let mut conversation = state.conversation.write().await;
        conversation.send(&text)
    };

    // The composer is cleared only when a message was actually appended
    if sent.is_some() {
        state.session.set_transcript(String::new()).await;
    }

    Json(SendResponse {
        sent: sent.is_some(),
        message: sent,
    })
}

/// GET /chat/messages
/// The conversation message list, oldest first
pub async fn get_messages(State(state): State<AppState>) -> impl IntoResponse {
    let conversation = state.conversation.read().await;

    Json(MessagesResponse {
        messages: conversation.messages().to_vec(),
    })
}
