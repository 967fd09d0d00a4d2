//! Capture session lifecycle

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TranscriptMode;

/// Failure reason reported by the speech recognition provider.
///
/// The engine never retries these; it records them and lets the host
/// decide whether to prompt the learner to try again. The code vocabulary
/// mirrors what recognition providers commonly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderError {
    /// Capture permission was denied
    NotAllowed,
    /// The provider heard nothing before its timeout
    NoSpeech,
    /// Audio capture failed or no input device was available
    AudioCapture,
    /// The provider's recognition service was unreachable
    Network,
    /// Recognition was aborted outside the engine's control
    Aborted,
    /// Any provider-specific code not covered above
    Other(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotAllowed => write!(f, "not-allowed"),
            ProviderError::NoSpeech => write!(f, "no-speech"),
            ProviderError::AudioCapture => write!(f, "audio-capture"),
            ProviderError::Network => write!(f, "network"),
            ProviderError::Aborted => write!(f, "aborted"),
            ProviderError::Other(code) => write!(f, "{code}"),
        }
    }
}

/// Capture lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No active capture
    Idle,
    /// Provider is actively emitting transcript events
    Listening,
    /// Capture ended; transcript and progress retained
    Stopped,
    /// Provider reported a failure; reason retained
    Errored { reason: ProviderError },
}

/// One listening attempt against one target paragraph.
///
/// Owned exclusively by the engine; transcript events are only wired
/// through while the session is listening, which is what keeps a single
/// alignment state from ever being driven by two event sources.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    state: SessionState,
    raw_transcript: String,
    language_code: String,
    started_at: Option<DateTime<Utc>>,
}

impl CaptureSession {
    pub fn new<S: Into<String>>(language_code: S) -> Self {
        Self {
            state: SessionState::Idle,
            raw_transcript: String::new(),
            language_code: language_code.into(),
            started_at: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == SessionState::Listening
    }

    /// Last received transcript text, kept for display only
    pub fn raw_transcript(&self) -> &str {
        &self.raw_transcript
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Start request: begin emitting transcript events into the attempt.
    pub fn begin_listening(&mut self) {
        self.state = SessionState::Listening;
        self.started_at = Some(Utc::now());
        debug!(language = %self.language_code, "session listening");
    }

    /// Record a transcript update. Cumulative delivery replaces the held
    /// text; incremental delivery appends to it.
    pub fn record_transcript(&mut self, text: &str, mode: TranscriptMode) {
        match mode {
            TranscriptMode::Cumulative => {
                self.raw_transcript.clear();
                self.raw_transcript.push_str(text);
            }
            TranscriptMode::Incremental => {
                if !self.raw_transcript.is_empty() && !text.is_empty() {
                    self.raw_transcript.push(' ');
                }
                self.raw_transcript.push_str(text);
            }
        }
    }

    /// Explicit stop or natural end-of-utterance. The transcript and any
    /// accumulated progress stay queryable.
    pub fn stop(&mut self) {
        if self.is_listening() {
            self.state = SessionState::Stopped;
            debug!("session stopped");
        } else {
            debug!(state = ?self.state, "stop ignored outside listening");
        }
    }

    /// Provider-reported failure. Recorded, never retried here.
    pub fn fail(&mut self, reason: ProviderError) {
        if self.is_listening() {
            debug!(%reason, "session errored");
            self.state = SessionState::Errored { reason };
        } else {
            debug!(state = ?self.state, %reason, "provider error ignored outside listening");
        }
    }

    /// Return to idle, discarding the transcript. The caller discards the
    /// alignment state in the same motion, so no partial reset is ever
    /// observable.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.raw_transcript.clear();
        self.started_at = None;
    }
}
