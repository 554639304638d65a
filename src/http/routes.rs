use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Push-to-talk control (press-in / press-out)
        .route("/chat/listen/start", post(handlers::start_listening))
        .route("/chat/listen/stop", post(handlers::stop_listening))
        // Session queries
        .route("/chat/status", get(handlers::get_status))
        // Composer value (live transcript, user-editable)
        .route(
            "/chat/transcript",
            get(handlers::get_transcript).put(handlers::set_transcript),
        )
        // Conversation
        .route("/chat/send", post(handlers::send_message))
        .route("/chat/messages", get(handlers::get_messages))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
