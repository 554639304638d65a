//! HTTP API server for the chat UI
//!
//! This module provides the REST surface an external UI drives:
//! - POST /chat/listen/start - push-to-talk pressed
//! - POST /chat/listen/stop - push-to-talk released
//! - GET  /chat/status - listening state and session statistics
//! - GET  /chat/transcript - live composer value
//! - PUT  /chat/transcript - edit the composer value
//! - POST /chat/send - send the composer value as a message
//! - GET  /chat/messages - conversation message list
//! - GET  /health - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
