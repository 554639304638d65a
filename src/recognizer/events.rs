use serde::{Deserialize, Serialize};

/// Event emitted by a speech-recognition backend.
///
/// Mirrors the callback surface of the platform speech services: lifecycle
/// notifications plus interim and final transcription hypotheses. Events are
/// delivered over a channel in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecognizerEvent {
    /// Capture has started and the service is processing audio.
    Started,

    /// Interim hypotheses, best candidate first. Later partials may revise
    /// or restart earlier ones.
    PartialResults { values: Vec<String> },

    /// The service's committed transcription for this capture.
    Results { values: Vec<String> },

    /// The service ended the capture, either on request or on its own
    /// (silence timeout).
    Ended,

    /// Recognition failed. Non-fatal: the session degrades to idle.
    Error {
        code: Option<i32>,
        message: String,
    },
}
