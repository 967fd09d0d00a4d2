//! Event types streamed to rendering layers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recito_align::ProgressSummary;

use crate::session::ProviderError;
use crate::AttemptId;

/// Event types a host can stream to its presentation layer
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// A fresh attempt began listening
    #[serde(rename = "attempt_started")]
    AttemptStarted {
        attempt_id: AttemptId,
        language: String,
        total_words: usize,
        timestamp: DateTime<Utc>,
    },

    /// Progress after a transcript update
    #[serde(rename = "progress")]
    Progress {
        attempt_id: AttemptId,
        completed_count: usize,
        total_count: usize,
        percentage: u8,
        cursor: usize,
    },

    /// Attempt ended; progress stays visible
    #[serde(rename = "attempt_stopped")]
    AttemptStopped {
        attempt_id: AttemptId,
        timestamp: DateTime<Utc>,
    },

    /// Provider failure surfaced to the host
    #[serde(rename = "attempt_failed")]
    AttemptFailed {
        attempt_id: AttemptId,
        reason: ProviderError,
    },

    /// Attempt progress was discarded
    #[serde(rename = "attempt_reset")]
    AttemptReset { attempt_id: AttemptId },
}

impl EngineEvent {
    /// Progress event from an aggregated summary
    pub fn progress(attempt_id: AttemptId, summary: &ProgressSummary) -> Self {
        EngineEvent::Progress {
            attempt_id,
            completed_count: summary.completed_count,
            total_count: summary.total_count,
            percentage: summary.percentage,
            cursor: summary.cursor,
        }
    }

    /// Convert event to JSON string with newline
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{}\n", json))
    }
}
