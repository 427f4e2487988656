//! Light suffix stripping.
//!
//! Not a linguistic stemmer: each token loses at most one suffix from a
//! fixed, ordered table.

/// Checked in this order; the first eligible suffix wins.
pub const SUFFIXES: &[&str] = &["ing", "ly", "ed", "ious", "ies", "ive", "es", "s", "ment"];

/// Stem with the default [`SUFFIXES`] table.
pub fn stem(token: &str) -> &str {
    stem_with(token, SUFFIXES)
}

/// Strip the first suffix in `suffixes` that `token` ends with, provided at
/// least two characters remain. Lengths are counted in chars.
pub fn stem_with<'a>(token: &'a str, suffixes: &[&str]) -> &'a str {
    let token_len = token.chars().count();
    for suffix in suffixes {
        if token.ends_with(suffix) && token_len > suffix.chars().count() + 1 {
            return &token[..token.len() - suffix.len()];
        }
    }
    token
}
