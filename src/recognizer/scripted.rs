use super::backend::{RecognizerOptions, SpeechRecognizer};
use super::events::RecognizerEvent;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One step of a recognition script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Delay before the event is emitted, relative to the previous step
    pub delay_ms: u64,

    /// The event to emit
    pub event: RecognizerEvent,
}

impl ScriptStep {
    /// Partial-results step with the given candidates
    pub fn partial(delay_ms: u64, values: &[&str]) -> Self {
        Self {
            delay_ms,
            event: RecognizerEvent::PartialResults {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        }
    }

    /// Final-results step with the given candidates
    pub fn results(delay_ms: u64, values: &[&str]) -> Self {
        Self {
            delay_ms,
            event: RecognizerEvent::Results {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        }
    }

    /// Capture-ended step
    pub fn ended(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            event: RecognizerEvent::Ended,
        }
    }

    /// Recognition-error step
    pub fn error(delay_ms: u64, code: Option<i32>, message: &str) -> Self {
        Self {
            delay_ms,
            event: RecognizerEvent::Error {
                code,
                message: message.to_string(),
            },
        }
    }
}

/// A replayable sequence of recognition events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionScript {
    pub steps: Vec<ScriptStep>,
}

impl RecognitionScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    /// Load a script from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recognition script {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse recognition script {}", path.display()))
    }
}

/// Recognition backend that replays a scripted event sequence
///
/// Stands in for a platform speech service where none is bound. The replay
/// task emits `Started`, plays the script, then honors the configured
/// complete-silence timeout before ending the capture on its own, the way
/// the real service does after the speaker falls silent.
pub struct ScriptedRecognizer {
    script: RecognitionScript,

    /// Whether a capture is currently in progress
    capturing: Arc<AtomicBool>,

    /// Sender side of the active capture's event channel
    events_tx: Option<mpsc::Sender<RecognizerEvent>>,

    /// Handle for the replay task
    replay_task: Option<JoinHandle<()>>,
}

impl ScriptedRecognizer {
    pub fn new(script: RecognitionScript) -> Self {
        Self {
            script,
            capturing: Arc::new(AtomicBool::new(false)),
            events_tx: None,
            replay_task: None,
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn start(
        &mut self,
        locale: &str,
        options: RecognizerOptions,
    ) -> Result<mpsc::Receiver<RecognizerEvent>> {
        if self.capturing.load(Ordering::SeqCst) {
            anyhow::bail!("Capture already in progress");
        }

        info!("Starting scripted capture (locale: {})", locale);
        self.capturing.store(true, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel(32);
        self.events_tx = Some(tx.clone());

        let script = self.script.clone();
        let capturing = Arc::clone(&self.capturing);
        let silence_timeout = Duration::from_millis(options.complete_silence_timeout_ms);

        let replay_task = tokio::spawn(async move {
            if tx.send(RecognizerEvent::Started).await.is_err() {
                capturing.store(false, Ordering::SeqCst);
                return;
            }

            let mut script_ended = false;
            for step in script.steps {
                tokio::time::sleep(Duration::from_millis(step.delay_ms)).await;

                // stop() already emitted Ended on our behalf
                if !capturing.load(Ordering::SeqCst) {
                    return;
                }

                script_ended = matches!(step.event, RecognizerEvent::Ended);
                if tx.send(step.event).await.is_err() {
                    break;
                }
                if script_ended {
                    break;
                }
            }

            // The speaker has gone silent; end the capture the way the real
            // service does once the silence timeout elapses.
            if !script_ended {
                tokio::time::sleep(silence_timeout).await;
                if capturing.load(Ordering::SeqCst) {
                    let _ = tx.send(RecognizerEvent::Ended).await;
                }
            }

            capturing.store(false, Ordering::SeqCst);
        });

        self.replay_task = Some(replay_task);

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if !self.capturing.swap(false, Ordering::SeqCst) {
            warn!("Stop requested but no capture in progress");
            return Ok(());
        }

        info!("Stopping scripted capture");

        // The replay task exits on its own once the capturing flag clears;
        // consumers still get the Ended notification they expect.
        if let Some(tx) = &self.events_tx {
            let _ = tx.send(RecognizerEvent::Ended).await;
        }

        Ok(())
    }

    async fn destroy(&mut self) -> Result<()> {
        self.capturing.store(false, Ordering::SeqCst);
        self.events_tx = None;

        if let Some(task) = self.replay_task.take() {
            task.abort();
        }

        info!("Scripted recognizer destroyed");
        Ok(())
    }

    fn available_services(&self) -> Vec<String> {
        vec!["scripted".to_string()]
    }

    fn microphone_permission(&self) -> Option<bool> {
        // No real microphone is involved
        Some(true)
    }

    fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
