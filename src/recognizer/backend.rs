use super::events::RecognizerEvent;
use super::scripted::{RecognitionScript, ScriptedRecognizer};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;

/// Options forwarded to the recognition service at capture start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerOptions {
    /// Silence length that completes the capture, in milliseconds
    pub complete_silence_timeout_ms: u64,

    /// Silence length after a possibly-complete utterance, in milliseconds
    pub possibly_complete_silence_timeout_ms: u64,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            complete_silence_timeout_ms: 2000,
            possibly_complete_silence_timeout_ms: 2000,
        }
    }
}

/// Speech-recognition backend trait
///
/// Backend implementations:
/// - Scripted: replays a recorded event sequence (tests, demos, development)
/// - Native: the host platform's speech service, bound per platform
#[async_trait::async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Begin a capture for the given locale.
    ///
    /// Returns a channel receiver that will receive recognition events.
    /// Requesting a start while a capture is already in progress is an
    /// error; callers are expected to guard with `is_capturing`.
    async fn start(
        &mut self,
        locale: &str,
        options: RecognizerOptions,
    ) -> Result<mpsc::Receiver<RecognizerEvent>>;

    /// Stop the current capture. The service emits `Ended` on the event
    /// channel once the capture is torn down.
    async fn stop(&mut self) -> Result<()>;

    /// Release the underlying service. The recognizer is unusable afterwards.
    async fn destroy(&mut self) -> Result<()>;

    /// Recognition services available on this host, for startup diagnostics
    fn available_services(&self) -> Vec<String>;

    /// Microphone-record permission state, if the host exposes a query.
    /// `None` when the platform has no such query.
    fn microphone_permission(&self) -> Option<bool>;

    /// Check if a capture is currently in progress
    fn is_capturing(&self) -> bool;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Recognition backend factory
pub struct RecognizerFactory;

impl RecognizerFactory {
    /// Create a recognition backend for the given source
    pub fn create(source: RecognizerSource) -> Result<Box<dyn SpeechRecognizer>> {
        match source {
            RecognizerSource::Scripted(script) => Ok(Box::new(ScriptedRecognizer::new(script))),

            RecognizerSource::Native => {
                anyhow::bail!("No native speech recognition binding is available on this host")
            }
        }
    }
}

/// Recognition backend source
#[derive(Debug, Clone)]
pub enum RecognizerSource {
    /// Replay a scripted event sequence (tests, demos, development)
    Scripted(RecognitionScript),
    /// The host platform's speech service
    Native,
}

/// Log startup diagnostics: microphone permission and available services.
/// Informational only; nothing is gated on the outcome.
pub fn log_startup_diagnostics(recognizer: &dyn SpeechRecognizer) {
    match recognizer.microphone_permission() {
        Some(granted) => info!("Microphone record permission granted: {}", granted),
        None => info!("Microphone permission not queryable on this host"),
    }
    info!(
        "Available recognition services: {:?}",
        recognizer.available_services()
    );
}
