//! Cross-script text normalization and word similarity scoring
//!
//! Leaf crate of the recito workspace. Lesson content spans six scripts
//! (Latin, Devanagari, Kannada, Tamil among them), and recognized speech
//! arrives with whatever casing, punctuation, and diacritics the provider
//! emits. This crate reduces both sides to a comparable form and scores
//! how close two reduced tokens are.
//!
//! Both functions are total: malformed or empty input degrades to an empty
//! string or a zero score, never an error. Uncontrolled speech input must
//! not be able to crash an alignment pass.
//!
//! # Example
//!
//! ```
//! use recito_text::{normalize, similarity};
//!
//! let target = normalize("¡Hombre!");
//! let spoken = normalize("ombre");
//! assert_eq!(target, "hombre");
//! assert_eq!(similarity(&target, &spoken), 83);
//! ```

mod normalize;
mod similarity;

pub use normalize::normalize;
pub use similarity::similarity;
