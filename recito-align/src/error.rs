//! Error types for alignment

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlignError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("target paragraph contains no words")]
    EmptyTarget,

    #[error("invalid aligner configuration: {0}")]
    Config(String),
}

impl AlignError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
