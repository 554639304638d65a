use super::config::SessionConfig;
use super::stats::SessionStats;
use crate::recognizer::{RecognizerEvent, SpeechRecognizer};
use crate::transcript::TranscriptReconciler;
use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Listening state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListeningState {
    /// No capture in progress
    Idle,
    /// A capture is active and events are being processed
    Listening,
}

/// A push-to-talk listening session that manages recognizer capture,
/// transcript reconciliation, and the live composer value
///
/// One session object exists per conversation; at most one capture is
/// active at a time, enforced by the Idle/Listening state rather than by
/// locking. Press-in maps to `start()`, press-out to `stop()`; the service
/// ending the capture on its own (silence timeout) is handled by the event
/// task.
pub struct ListeningSession {
    /// Session configuration
    config: SessionConfig,

    /// Recognition backend (platform service or scripted)
    recognizer: Arc<Mutex<Box<dyn SpeechRecognizer>>>,

    /// When the session was created
    started_at: chrono::DateTime<chrono::Utc>,

    /// Whether a capture is currently active
    listening: Arc<AtomicBool>,

    /// Transcript accumulation state and merge strategy
    reconciler: Arc<Mutex<TranscriptReconciler>>,

    /// Number of partial-result events received during the current capture
    partial_events: Arc<AtomicUsize>,

    /// Handle for the event-processing task
    event_task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ListeningSession {
    /// Create a new listening session around the given recognition backend
    pub fn new(config: SessionConfig, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        info!(
            "Creating listening session {} (backend: {}, merge: {:?})",
            config.session_id,
            recognizer.name(),
            config.merge
        );

        let reconciler = TranscriptReconciler::new(config.merge);

        Self {
            config,
            recognizer: Arc::new(Mutex::new(recognizer)),
            started_at: Utc::now(),
            listening: Arc::new(AtomicBool::new(false)),
            reconciler: Arc::new(Mutex::new(reconciler)),
            partial_events: Arc::new(AtomicUsize::new(0)),
            event_task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Current listening state
    pub fn state(&self) -> ListeningState {
        if self.listening.load(Ordering::SeqCst) {
            ListeningState::Listening
        } else {
            ListeningState::Idle
        }
    }

    /// Check if a capture is currently active
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Start a capture (push-to-talk pressed)
    ///
    /// Calling start while already listening is a safely-ignored duplicate
    /// request. A recognizer start failure leaves the session idle and is
    /// logged, never propagated to the caller.
    pub async fn start(&self) -> Result<()> {
        if self.listening.load(Ordering::SeqCst) {
            warn!("Listening already started");
            return Ok(());
        }

        info!("Starting listening session: {}", self.config.session_id);

        // Accumulation state never survives across captures
        {
            let mut reconciler = self.reconciler.lock().await;
            reconciler.reset();
        }
        self.partial_events.store(0, Ordering::SeqCst);

        self.listening.store(true, Ordering::SeqCst);

        let mut events = {
            let mut recognizer = self.recognizer.lock().await;
            match recognizer
                .start(&self.config.locale, self.config.recognizer_options.clone())
                .await
            {
                Ok(events) => events,
                Err(e) => {
                    error!("Failed to start recognizer: {:#}", e);
                    self.listening.store(false, Ordering::SeqCst);
                    return Ok(());
                }
            }
        };

        // Spawn the event-processing task; events are folded into the
        // transcript strictly in arrival order.
        let reconciler = Arc::clone(&self.reconciler);
        let listening = Arc::clone(&self.listening);
        let partial_events = Arc::clone(&self.partial_events);
        let session_id = self.config.session_id.clone();

        let event_task = tokio::spawn(async move {
            info!("Recognition event task started");

            while let Some(event) = events.recv().await {
                if !listening.load(Ordering::SeqCst) {
                    break;
                }

                match event {
                    RecognizerEvent::Started => {
                        info!("Capture started for session {}", session_id);
                    }

                    RecognizerEvent::PartialResults { values } => {
                        let mut reconciler = reconciler.lock().await;
                        reconciler.apply_partials(&values);
                        partial_events.fetch_add(1, Ordering::SeqCst);
                        debug!("Working transcript: {:?}", reconciler.working());
                    }

                    RecognizerEvent::Results { values } => {
                        // The accumulated transcript is the session result;
                        // the service's own final payload is logged only.
                        let reconciler = reconciler.lock().await;
                        info!(
                            "Final results for session {} (payload: {:?}, transcript: {:?})",
                            session_id,
                            values,
                            reconciler.finalize()
                        );
                    }

                    RecognizerEvent::Ended => {
                        info!("Capture ended for session {}", session_id);
                        listening.store(false, Ordering::SeqCst);
                        break;
                    }

                    RecognizerEvent::Error { code, message } => {
                        warn!("Recognition error (code: {:?}): {}", code, message);
                    }
                }
            }

            listening.store(false, Ordering::SeqCst);
            info!("Recognition event task stopped");
        });

        {
            let mut handle = self.event_task_handle.lock().await;
            *handle = Some(event_task);
        }

        info!("Listening session started successfully");

        Ok(())
    }

    /// Stop the capture (push-to-talk released)
    ///
    /// Best-effort: the session is idle afterwards even if the recognizer
    /// refuses the stop request. Stopping while already idle is a no-op.
    pub async fn stop(&self) -> Result<()> {
        if !self.listening.load(Ordering::SeqCst) {
            warn!("Listening not active");
            return Ok(());
        }

        info!("Stopping listening session: {}", self.config.session_id);

        {
            let mut recognizer = self.recognizer.lock().await;
            if let Err(e) = recognizer.stop().await {
                error!("Failed to stop recognizer: {:#}", e);
            }
        }

        self.listening.store(false, Ordering::SeqCst);

        // Wait for the event task to drain
        {
            let mut handle = self.event_task_handle.lock().await;
            if let Some(task) = handle.take() {
                if let Err(e) = task.await {
                    error!("Event task panicked: {}", e);
                }
            }
        }

        info!("Listening session stopped");

        Ok(())
    }

    /// The live composer value: the current working transcript, readable at
    /// any time, including mid-capture
    pub async fn transcript(&self) -> String {
        let reconciler = self.reconciler.lock().await;
        reconciler.working().to_string()
    }

    /// Replace the composer value (user edit path)
    pub async fn set_transcript(&self, text: impl Into<String>) {
        let mut reconciler = self.reconciler.lock().await;
        reconciler.set_working(text);
    }

    /// Return the composer value and clear it (send path)
    pub async fn take_transcript(&self) -> String {
        let mut reconciler = self.reconciler.lock().await;
        reconciler.take_working()
    }

    /// Get current session statistics
    pub async fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        let transcript_chars = {
            let reconciler = self.reconciler.lock().await;
            reconciler.working().chars().count()
        };

        SessionStats {
            listening: self.listening.load(Ordering::SeqCst),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            partial_events: self.partial_events.load(Ordering::SeqCst),
            transcript_chars,
        }
    }

    /// Release the recognition backend. The session cannot capture again
    /// afterwards; issued by the owner at shutdown.
    pub async fn shutdown(&self) -> Result<()> {
        if self.listening.load(Ordering::SeqCst) {
            self.stop().await?;
        }

        let mut recognizer = self.recognizer.lock().await;
        recognizer.destroy().await
    }
}
