//! Partial-transcript reconciliation
//!
//! Turns the stream of overlapping, non-monotonic partial hypotheses a
//! speech service emits into one coherent working transcript:
//! - Merge strategies for the two partial-result shapes in the wild
//! - Accumulation state (working text, stable prefix, last partial)
//! - The reconciler that applies events and surfaces the session result

mod merge;
mod reconciler;

pub use merge::{
    MergeSemantics, MergeStrategyFactory, PartialMerge, ReplaceMerge, SegmentMerge,
    TranscriptState,
};
pub use reconciler::TranscriptReconciler;
