//! Normalization pipeline. Runs every stage in order.

use crate::{punct, stemmer, stopwords, tokenizer, traits::TextNormalizer};
use serde::Serialize;

/// Intermediate results of one normalization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedMessage {
    /// Tokens after punctuation stripping, before stopword removal.
    pub tokens: Vec<String>,
    /// Tokens that survived stopword removal, after stemming.
    pub stems: Vec<String>,
    pub canonical: String,
}

impl NormalizedMessage {
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    pub fn dropped_stopwords(&self) -> usize {
        self.tokens.len() - self.stems.len()
    }
}

/// Normalize a raw message into its canonical, space-separated form.
///
/// Total and pure: every input, including the empty string, has a defined
/// output, which may itself be empty.
pub fn normalize(text: &str) -> String {
    let lowered = punct::lowercase(text);
    let stripped = punct::strip_punctuation(&lowered);
    let tokens = tokenizer::tokenize(&stripped);
    stopwords::remove_stopwords(tokens)
        .into_iter()
        .map(stemmer::stem)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`normalize`], keeping the intermediate token lists.
pub fn normalize_detailed(text: &str) -> NormalizedMessage {
    let lowered = punct::lowercase(text);
    let stripped = punct::strip_punctuation(&lowered);
    let tokens = tokenizer::tokenize(&stripped);
    let stems: Vec<String> = stopwords::remove_stopwords(tokens.iter().copied())
        .into_iter()
        .map(|t| stemmer::stem(t).to_string())
        .collect();
    let canonical = stems.join(" ");
    NormalizedMessage {
        tokens: tokens.into_iter().map(String::from).collect(),
        stems,
        canonical,
    }
}

/// The default normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Normalizer {
    fn normalize(&self, text: &str) -> String {
        normalize(text)
    }
}
