//! Speech-recognition service boundary
//!
//! This module provides the seam to the external recognition service:
//! - The `SpeechRecognizer` backend trait and its factory
//! - Typed recognition events delivered over a channel
//! - A scripted backend that replays recorded event sequences
//! - Startup diagnostics (microphone permission, available services)

pub mod backend;
pub mod events;
pub mod scripted;

pub use backend::{
    log_startup_diagnostics, RecognizerFactory, RecognizerOptions, RecognizerSource,
    SpeechRecognizer,
};
pub use events::RecognizerEvent;
pub use scripted::{RecognitionScript, ScriptStep, ScriptedRecognizer};
