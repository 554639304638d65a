use super::merge::{MergeSemantics, MergeStrategyFactory, PartialMerge, TranscriptState};
use tracing::debug;

/// Assembles a coherent working transcript from a stream of overlapping,
/// non-monotonic partial recognition hypotheses
///
/// The reconciler owns the accumulation state and an injected merge
/// strategy chosen once at construction. It never fails: malformed or
/// empty payloads are ignored rather than raised to the caller.
pub struct TranscriptReconciler {
    state: TranscriptState,
    strategy: Box<dyn PartialMerge>,
}

impl TranscriptReconciler {
    pub fn new(semantics: MergeSemantics) -> Self {
        Self {
            state: TranscriptState::default(),
            strategy: MergeStrategyFactory::create(semantics),
        }
    }

    /// Clear all accumulation state. Called at every session start; the
    /// working text, stable prefix, and last partial never carry across
    /// sessions.
    pub fn reset(&mut self) {
        self.state = TranscriptState::default();
    }

    /// Fold one partial-result event into the working transcript.
    ///
    /// Only the best candidate (the first entry) is considered. Events with
    /// no candidates, or an empty best candidate, change nothing.
    pub fn apply_partials(&mut self, values: &[String]) {
        let candidate = match values.first() {
            Some(candidate) if !candidate.is_empty() => candidate,
            _ => {
                debug!("Ignoring partial event with no usable candidate");
                return;
            }
        };

        self.strategy.apply(&mut self.state, candidate);
    }

    /// The session's result text.
    ///
    /// The recognizer's own final payload is not consulted: the transcript
    /// accumulated from partials is the source of truth for what the user
    /// saw and possibly edited.
    pub fn finalize(&self) -> String {
        self.state.working.clone()
    }

    /// The live working transcript
    pub fn working(&self) -> &str {
        &self.state.working
    }

    /// Replace the working transcript (user edit path)
    pub fn set_working(&mut self, text: impl Into<String>) {
        self.state.working = text.into();
    }

    /// Return the working transcript and clear it (send path)
    pub fn take_working(&mut self) -> String {
        std::mem::take(&mut self.state.working)
    }

    /// The committed portion of the transcript
    pub fn stable_prefix(&self) -> &str {
        &self.state.stable_prefix
    }

    /// The most recently applied candidate
    pub fn last_partial(&self) -> &str {
        &self.state.last_partial
    }

    /// Name of the injected merge strategy, for logging
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}
