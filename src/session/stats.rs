use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about a listening session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether a capture is currently active
    pub listening: bool,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Total session age in seconds
    pub duration_secs: f64,

    /// Number of partial-result events received so far
    pub partial_events: usize,

    /// Length of the current working transcript, in characters
    pub transcript_chars: usize,
}
