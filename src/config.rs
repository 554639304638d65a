use crate::transcript::MergeSemantics;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub recognizer: RecognizerConfig,
    pub transcript: TranscriptConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct RecognizerConfig {
    /// Locale tag requested from the recognition service
    pub locale: String,

    /// Silence length that completes a capture, in milliseconds
    pub complete_silence_timeout_ms: u64,

    /// Silence length after a possibly-complete utterance, in milliseconds
    pub possibly_complete_silence_timeout_ms: u64,

    /// Path to a recognition event script; when set, the scripted backend
    /// is used instead of the host platform's speech service
    pub script_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptConfig {
    /// Partial-result merge semantics: "replace" or "segment"
    pub merge: MergeSemantics,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
