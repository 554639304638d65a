pub mod chat;
pub mod config;
pub mod http;
pub mod recognizer;
pub mod session;
pub mod transcript;

pub use chat::{Conversation, Message, Sender};
pub use config::Config;
pub use http::{create_router, AppState};
pub use recognizer::{
    RecognitionScript, RecognizerEvent, RecognizerFactory, RecognizerOptions, RecognizerSource,
    ScriptStep, ScriptedRecognizer, SpeechRecognizer,
};
pub use session::{ListeningSession, ListeningState, SessionConfig, SessionStats};
pub use transcript::{MergeSemantics, PartialMerge, TranscriptReconciler, TranscriptState};
