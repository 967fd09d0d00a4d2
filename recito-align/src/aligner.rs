//! Monotonic forward alignment of recognized words onto the target sequence

use recito_text::{normalize, similarity};
use tracing::{debug, trace};

use crate::error::{AlignError, Result};
use crate::target::AlignmentState;
use crate::DEFAULT_MATCH_THRESHOLD;

/// Aligner configuration
#[derive(Debug, Clone)]
pub struct AlignerConfig {
    /// Minimum similarity (0–100) for a spoken token to confirm a target
    /// word. Default: 60.
    pub match_threshold: u8,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl AlignerConfig {
    /// Set the match threshold
    pub fn match_threshold(mut self, threshold: u8) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.match_threshold == 0 || self.match_threshold > 100 {
            return Err(AlignError::config(
                "match_threshold must be between 1 and 100",
            ));
        }
        Ok(())
    }
}

/// Turns bursts of recognized words into per-target-word scores and cursor
/// advancement.
///
/// The aligner keeps no buffer of its own across calls: every call re-runs
/// the matching sweep from the current cursor over exactly the words it is
/// given. Whether those words are a cumulative transcript or an incremental
/// delta is the caller's boundary concern.
///
/// Greedy forward-only matching fits here because both the target and the
/// expected speech are one fixed linear sequence (a read-aloud paragraph),
/// so the model is approximate sequence alignment with a monotonic cursor,
/// not arbitrary bipartite matching. Confirmed words stay confirmed, which
/// is what keeps displayed progress from flickering backward.
pub struct Aligner {
    config: AlignerConfig,
}

impl Aligner {
    /// Create an aligner with the given configuration
    pub fn new(config: AlignerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Match a burst of recognized raw tokens against the pending tail of
    /// the target sequence. Returns the number of newly confirmed words.
    ///
    /// Single forward sweep: each spoken token is scored against target
    /// words from the cursor onward. On a confirmation both sides advance;
    /// on a miss only the target index advances, so the same spoken token
    /// is retried against later target words, which absorbs recognizers
    /// that merge or split words differently than the target tokenization.
    /// A spoken word that matches nothing is simply never consumed; there
    /// is no error, only lack of progress.
    ///
    /// Empty input and an already-complete attempt are no-ops.
    pub fn consume(&self, state: &mut AlignmentState, spoken_words: &[&str]) -> usize {
        if spoken_words.is_empty() || state.is_complete() {
            return 0;
        }

        // Tokens that normalize to nothing are recognition noise; drop them
        // up front so they cannot pin the spoken index.
        let spoken: Vec<String> = spoken_words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();

        let mut spoken_index = 0;
        let mut confirmed = 0;

        let start = state.cursor();
        let total = state.words().len();
        for i in start..total {
            if spoken_index >= spoken.len() {
                break;
            }

            let word = &mut state.words_mut()[i];
            if word.completed() {
                continue;
            }

            let score = similarity(&word.normalized_text, &spoken[spoken_index]);
            trace!(
                target_index = i,
                target_word = %word.normalized_text,
                spoken_word = %spoken[spoken_index],
                score,
                "scored spoken token"
            );

            if score >= self.config.match_threshold {
                word.score = Some(score);
                confirmed += 1;
                spoken_index += 1;
            }
        }

        state.advance_cursor();
        if confirmed > 0 {
            debug!(
                confirmed,
                cursor = state.cursor(),
                total,
                "alignment advanced"
            );
        }

        confirmed
    }
}
