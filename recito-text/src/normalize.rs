//! Canonicalization of raw text for cross-script comparison

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Reduce raw text to a canonical comparable form.
///
/// Steps, in order: case-fold, NFD decomposition, strip combining marks,
/// strip everything that is not a letter, number, or whitespace, collapse
/// whitespace runs to a single space, trim.
///
/// Classification is by Unicode general category only, so the same rules
/// apply to every script the lesson content uses. No locale-specific casing
/// tables are involved.
///
/// Deterministic and idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    // Case-fold first so decomposition sees the final letterforms, then
    // walk the NFD stream once. Whitespace is buffered as a single pending
    // separator and only emitted between kept characters, which gives the
    // collapse and trim steps for free.
    let lowered: String = text.chars().flat_map(char::to_lowercase).collect();
    for c in lowered.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if !c.is_alphanumeric() {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}
