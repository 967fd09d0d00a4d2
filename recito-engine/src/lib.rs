//! Pronunciation scoring engine
//!
//! A pure in-process computation module: the host application owns speech
//! capture and rendering; this crate owns everything between a transcript
//! event and a progress number. Attempts are keyed by numeric handles in
//! an explicit registry, so the engine is decoupled from any specific
//! capture technology.
//!
//! ## Quick Start
//!
//! ```
//! use recito_engine::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default())?;
//! let id = engine.start_attempt("Hola, me llamo María.", "es-ES")?;
//!
//! engine.on_transcript(id, "ola me yamo maria")?;
//!
//! let report = engine.get_progress(id)?;
//! assert!(report.completed_count >= 2);
//! engine.end_attempt(id)?;
//! # Ok::<(), recito_engine::EngineError>(())
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod session;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use recito_align::{summarize, Aligner, AlignerConfig, AlignmentState, TargetWord};

pub use config::{EngineConfig, TranscriptMode};
pub use error::{EngineError, Result};
pub use events::EngineEvent;
pub use session::{CaptureSession, ProviderError, SessionState};

// Re-exported so hosts only need this crate for the common path.
pub use recito_align::ProgressSummary;

/// Handle identifying one attempt in the engine's registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(u64);

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full progress view for a handle: the aggregated summary plus the
/// confirmed score of every target word in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub completed_count: usize,
    pub total_count: usize,
    pub percentage: u8,
    pub cursor: usize,
    pub per_word_scores: Vec<Option<u8>>,
}

struct Attempt {
    paragraph: String,
    session: CaptureSession,
    alignment: AlignmentState,
}

/// The engine: a handle-keyed registry of attempts, each pairing one
/// capture session with one alignment state.
///
/// Not internally thread-safe, and deliberately so: transcript callbacks
/// for a given attempt are already serialized by the provider, and the
/// engine keeps at most one attempt listening at a time, so all mutation
/// happens on one logical thread. `on_transcript` and `get_progress` are
/// bounded-time computations over small in-memory sequences, fine to run
/// directly on the event-delivery thread.
pub struct Engine {
    config: EngineConfig,
    aligner: Aligner,
    attempts: HashMap<AttemptId, Attempt>,
    next_handle: u64,
}

impl Engine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        let aligner = Aligner::new(
            AlignerConfig::default().match_threshold(config.match_threshold),
        )?;

        Ok(Self {
            config,
            aligner,
            attempts: HashMap::new(),
            next_handle: 1,
        })
    }

    /// Start a fresh attempt against a target paragraph.
    ///
    /// Tokenizes the paragraph on whitespace into the target word sequence
    /// and begins listening. Fails with `EmptyTarget` before any state is
    /// created if the paragraph has no words. Any previously listening
    /// attempt is stopped first; one event source at a time.
    pub fn start_attempt(&mut self, paragraph: &str, language_code: &str) -> Result<AttemptId> {
        let alignment = AlignmentState::new(paragraph)?;
        self.stop_active_listener();

        let id = AttemptId(self.next_handle);
        self.next_handle += 1;

        let mut session = CaptureSession::new(language_code);
        session.begin_listening();

        info!(
            attempt = %id,
            language = language_code,
            total_words = alignment.words().len(),
            "attempt started"
        );

        self.attempts.insert(
            id,
            Attempt {
                paragraph: paragraph.to_string(),
                session,
                alignment,
            },
        );

        Ok(id)
    }

    /// Feed a transcript update into an attempt's aligner.
    ///
    /// Ignored (current progress returned unchanged) unless the attempt is
    /// listening: a stopped attempt's provider events are already
    /// disconnected, so anything that still arrives is late noise.
    pub fn on_transcript(&mut self, id: AttemptId, text: &str) -> Result<ProgressSummary> {
        let mode = self.config.transcript_mode;
        // Field-level access keeps the aligner borrowable alongside the
        // attempt entry.
        let attempt = self
            .attempts
            .get_mut(&id)
            .ok_or(EngineError::InvalidAttempt(id))?;

        if !attempt.session.is_listening() {
            debug!(attempt = %id, state = ?attempt.session.state(), "transcript ignored");
            return Ok(summarize(&attempt.alignment));
        }

        attempt.session.record_transcript(text, mode);

        let words: Vec<&str> = text.split_whitespace().collect();
        self.aligner.consume(&mut attempt.alignment, &words);

        Ok(summarize(&attempt.alignment))
    }

    /// Full progress view for an attempt
    pub fn get_progress(&self, id: AttemptId) -> Result<ProgressReport> {
        let attempt = self.attempt(id)?;
        let summary = summarize(&attempt.alignment);
        Ok(ProgressReport {
            completed_count: summary.completed_count,
            total_count: summary.total_count,
            percentage: summary.percentage,
            cursor: summary.cursor,
            per_word_scores: attempt.alignment.per_word_scores(),
        })
    }

    /// Discard all progress for an attempt and return it to idle.
    ///
    /// Rebuilds the target word sequence from the same paragraph; atomic
    /// from the caller's perspective, no partially reset state is ever
    /// observable.
    pub fn reset_attempt(&mut self, id: AttemptId) -> Result<()> {
        let attempt = self.attempt_mut(id)?;
        attempt.alignment = AlignmentState::new(&attempt.paragraph)?;
        attempt.session.reset();
        info!(attempt = %id, "attempt reset");
        Ok(())
    }

    /// Fresh start request for an existing handle: reset, then listen
    /// again. This is the only path from stopped or errored back to
    /// listening.
    pub fn resume_attempt(&mut self, id: AttemptId) -> Result<()> {
        self.reset_attempt(id)?;
        self.stop_active_listener();
        let attempt = self.attempt_mut(id)?;
        attempt.session.begin_listening();
        info!(attempt = %id, "attempt resumed");
        Ok(())
    }

    /// Stop an attempt. Progress and transcript remain queryable.
    pub fn end_attempt(&mut self, id: AttemptId) -> Result<()> {
        let attempt = self.attempt_mut(id)?;
        attempt.session.stop();
        info!(attempt = %id, "attempt ended");
        Ok(())
    }

    /// Record a provider-reported failure against an attempt
    pub fn report_provider_error(&mut self, id: AttemptId, reason: ProviderError) -> Result<()> {
        let attempt = self.attempt_mut(id)?;
        attempt.session.fail(reason);
        Ok(())
    }

    /// Session lifecycle state for an attempt
    pub fn session_state(&self, id: AttemptId) -> Result<&SessionState> {
        Ok(self.attempt(id)?.session.state())
    }

    /// Last received transcript for an attempt, for display
    pub fn transcript(&self, id: AttemptId) -> Result<&str> {
        Ok(self.attempt(id)?.session.raw_transcript())
    }

    /// Target words with per-word completion, for display
    pub fn target_words(&self, id: AttemptId) -> Result<&[TargetWord]> {
        Ok(self.attempt(id)?.alignment.words())
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn attempt(&self, id: AttemptId) -> Result<&Attempt> {
        self.attempts.get(&id).ok_or(EngineError::InvalidAttempt(id))
    }

    fn attempt_mut(&mut self, id: AttemptId) -> Result<&mut Attempt> {
        self.attempts
            .get_mut(&id)
            .ok_or(EngineError::InvalidAttempt(id))
    }

    fn stop_active_listener(&mut self) {
        for (id, attempt) in self.attempts.iter_mut() {
            if attempt.session.is_listening() {
                debug!(attempt = %id, "stopping previous listener");
                attempt.session.stop();
            }
        }
    }
}
