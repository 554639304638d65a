use serde::{Deserialize, Serialize};

/// Transcript accumulation state for one listening session
///
/// All three strings are reset together at session start; none of them
/// survives across sessions.
#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    /// Text currently presented to the user
    pub working: String,

    /// Portion of `working` that later partials must not overwrite
    pub stable_prefix: String,

    /// Candidate received in the previous partial event
    pub last_partial: String,
}

/// Partial-result merge semantics
///
/// Platform speech services disagree about the shape of their partial
/// results: some keep revising a single growing hypothesis for the whole
/// capture, others restart their internal buffer at segment boundaries.
/// The semantics are chosen once, when the reconciler is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeSemantics {
    /// Each partial replaces the working text wholesale (iOS-shaped events)
    Replace,
    /// Partials extend a stable prefix that is committed whenever the
    /// service restarts its buffer (Android-shaped events)
    Segment,
}

impl Default for MergeSemantics {
    fn default() -> Self {
        #[cfg(target_os = "ios")]
        {
            MergeSemantics::Replace
        }

        #[cfg(not(target_os = "ios"))]
        {
            MergeSemantics::Segment
        }
    }
}

/// Strategy applied to each incoming partial candidate
pub trait PartialMerge: Send + Sync {
    /// Fold one non-empty candidate into the accumulation state
    fn apply(&self, state: &mut TranscriptState, candidate: &str);

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Merge strategy factory
pub struct MergeStrategyFactory;

impl MergeStrategyFactory {
    /// Create the merge strategy for the given semantics
    pub fn create(semantics: MergeSemantics) -> Box<dyn PartialMerge> {
        match semantics {
            MergeSemantics::Replace => Box::new(ReplaceMerge),
            MergeSemantics::Segment => Box::new(SegmentMerge),
        }
    }
}

/// Replace-style merge: the newest candidate wins wholesale
///
/// The stable prefix is never written from partials here; it only resets at
/// session boundaries, so each candidate effectively replaces the whole
/// working text. A candidate identical to the previous one is a no-op.
pub struct ReplaceMerge;

impl PartialMerge for ReplaceMerge {
    fn apply(&self, state: &mut TranscriptState, candidate: &str) {
        if candidate == state.last_partial {
            return;
        }

        state.working = format!("{}{}", state.stable_prefix, candidate);
        state.last_partial = candidate.to_string();
    }

    fn name(&self) -> &'static str {
        "replace"
    }
}

/// Segment-commit merge: confirmed text survives recognizer buffer resets
///
/// The service signals a reset implicitly: the new candidate no longer
/// starts with the previous one. At that point the current working text is
/// committed into the stable prefix before the candidate is applied, so
/// speech the service has forgotten stays on screen. The first candidate of
/// a session never triggers a commit (the empty string is a prefix of
/// anything).
pub struct SegmentMerge;

impl PartialMerge for SegmentMerge {
    fn apply(&self, state: &mut TranscriptState, candidate: &str) {
        if !candidate.starts_with(&state.last_partial) {
            state.stable_prefix = state.working.clone();
        }

        state.working = format!("{}{}", state.stable_prefix, candidate);
        state.last_partial = candidate.to_string();
    }

    fn name(&self) -> &'static str {
        "segment"
    }
}
