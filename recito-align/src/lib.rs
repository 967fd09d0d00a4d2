//! Streaming alignment of recognized speech against a fixed target paragraph
//!
//! A read-aloud attempt is a fixed linear sequence of target words and a
//! live, noisy stream of recognized words. This crate turns each burst of
//! recognized words into per-target-word scores and a monotonic cursor:
//! once a word is confirmed it stays confirmed, so displayed progress never
//! flickers backward, no matter how the recognizer revises its transcript.
//!
//! # Example
//!
//! ```
//! use recito_align::{Aligner, AlignerConfig, AlignmentState, summarize};
//!
//! let mut state = AlignmentState::new("Hola, me llamo María.")?;
//! let aligner = Aligner::new(AlignerConfig::default())?;
//!
//! // "ola" is close enough to "hola" to confirm it despite the dropped h.
//! aligner.consume(&mut state, &["ola", "me"]);
//! aligner.consume(&mut state, &["llamo", "maría"]);
//!
//! let progress = summarize(&state);
//! assert_eq!(progress.completed_count, 4);
//! assert_eq!(progress.percentage, 100);
//! # Ok::<(), recito_align::AlignError>(())
//! ```

mod aligner;
mod error;
mod progress;
mod target;

pub use aligner::{Aligner, AlignerConfig};
pub use error::{AlignError, Result};
pub use progress::{summarize, ProgressSummary};
pub use target::{AlignmentState, TargetWord};

/// Default minimum similarity (0–100) for a spoken token to confirm a
/// target word.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 60;
