//! Error types for engine operations

use thiserror::Error;

use crate::AttemptId;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// An operation referenced a handle the registry does not know:
    /// a programming-contract violation on the host side, never retried.
    #[error("unknown attempt handle: {0}")]
    InvalidAttempt(AttemptId),

    /// Alignment-layer failure, e.g. a target paragraph with no words.
    #[error(transparent)]
    Align(#[from] recito_align::AlignError),
}
