//! Word tokenizer.

use regex::Regex;
use std::sync::LazyLock;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Split into maximal runs of word characters (letters, digits, underscore).
pub fn tokenize(text: &str) -> Vec<&str> {
    RE_WORD.find_iter(text).map(|m| m.as_str()).collect()
}
