//! Progress aggregation over alignment state

use serde::{Deserialize, Serialize};

use crate::target::AlignmentState;

/// Summary of an attempt's completion, derived from alignment state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Number of confirmed target words
    pub completed_count: usize,
    /// Total number of target words
    pub total_count: usize,
    /// Rounded overall completion (0–100)
    pub percentage: u8,
    /// Index of the first not-yet-confirmed word
    pub cursor: usize,
}

/// Derive the completion summary for an attempt.
///
/// Pure function of the alignment state, cheap enough to call after every
/// consume. An empty sequence reports 0% rather than dividing by zero.
pub fn summarize(state: &AlignmentState) -> ProgressSummary {
    let total_count = state.words().len();
    let completed_count = state.words().iter().filter(|w| w.completed()).count();
    let percentage = if total_count == 0 {
        0
    } else {
        (100.0 * completed_count as f64 / total_count as f64).round() as u8
    };

    ProgressSummary {
        completed_count,
        total_count,
        percentage,
        cursor: state.cursor(),
    }
}
