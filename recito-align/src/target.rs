//! Target word sequence and alignment state

use recito_text::normalize;
use serde::Serialize;

use crate::error::{AlignError, Result};

/// One whitespace-delimited token of the paragraph the learner reads aloud.
///
/// Created once per attempt; the aligner is the only mutator, and mutation
/// only moves forward: a score is set at most once and never cleared
/// within an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetWord {
    /// 0-based position in the target sequence
    pub index: usize,
    /// Original script form, as displayed to the learner
    pub raw_text: String,
    /// Cached comparable form; may be empty for punctuation-only tokens
    pub normalized_text: String,
    /// Similarity recorded when the word was confirmed (0–100)
    pub score: Option<u8>,
}

impl TargetWord {
    fn new(index: usize, raw_text: &str) -> Self {
        Self {
            index,
            raw_text: raw_text.to_string(),
            normalized_text: normalize(raw_text),
            score: None,
        }
    }

    /// A word is completed once a score at or above the match threshold
    /// has been recorded for it.
    pub fn completed(&self) -> bool {
        self.score.is_some()
    }
}

/// Per-attempt alignment state: the target word sequence plus a cursor.
///
/// Invariant: every word before `cursor` is completed, and `cursor` never
/// decreases within an attempt. Rebuilding for a new attempt is the only
/// way progress is discarded.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentState {
    words: Vec<TargetWord>,
    cursor: usize,
}

impl AlignmentState {
    /// Tokenize a target paragraph on whitespace into a fresh sequence.
    ///
    /// The host supplies space-delimited paragraph text regardless of
    /// script; tokenization itself is script-agnostic.
    pub fn new(paragraph: &str) -> Result<Self> {
        let words: Vec<TargetWord> = paragraph
            .split_whitespace()
            .enumerate()
            .map(|(index, raw)| TargetWord::new(index, raw))
            .collect();

        if words.is_empty() {
            return Err(AlignError::EmptyTarget);
        }

        Ok(Self { words, cursor: 0 })
    }

    /// The target word sequence in original order
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }

    /// Index of the first not-yet-confirmed word, or `words().len()` once
    /// the attempt is complete
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every target word has been confirmed
    pub fn is_complete(&self) -> bool {
        self.cursor == self.words.len()
    }

    /// Confirmed similarity per target word, in target order
    pub fn per_word_scores(&self) -> Vec<Option<u8>> {
        self.words.iter().map(|w| w.score).collect()
    }

    pub(crate) fn words_mut(&mut self) -> &mut [TargetWord] {
        &mut self.words
    }

    /// Recompute the cursor as the lowest pending index. Completed words
    /// can sit past the cursor, so this can jump over several of them at
    /// once, but it can never move backward.
    pub(crate) fn advance_cursor(&mut self) {
        while self.cursor < self.words.len() && self.words[self.cursor].completed() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_in_script_order() {
        let state = AlignmentState::new("Hola, me llamo María.").unwrap();
        let raw: Vec<&str> = state.words().iter().map(|w| w.raw_text.as_str()).collect();
        assert_eq!(raw, ["Hola,", "me", "llamo", "María."]);
        assert_eq!(state.words()[3].normalized_text, "maria");
        assert_eq!(state.cursor(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_indices_match_positions() {
        let state = AlignmentState::new("एक दो तीन").unwrap();
        for (i, word) in state.words().iter().enumerate() {
            assert_eq!(word.index, i);
        }
    }

    #[test]
    fn test_empty_paragraph_rejected() {
        assert_eq!(AlignmentState::new("").unwrap_err(), AlignError::EmptyTarget);
        assert_eq!(
            AlignmentState::new(" \t \n ").unwrap_err(),
            AlignError::EmptyTarget
        );
    }

    #[test]
    fn test_fresh_words_are_pending() {
        let state = AlignmentState::new("uno dos").unwrap();
        assert!(state.words().iter().all(|w| !w.completed()));
        assert_eq!(state.per_word_scores(), vec![None, None]);
    }
}
