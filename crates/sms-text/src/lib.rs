//! SMS text normalization.
//!
//! Stages, applied in order by [`normalize`]:
//! 1. Lower-casing
//! 2. ASCII punctuation stripping
//! 3. Word tokenization
//! 4. Stopword removal
//! 5. Single-suffix stemming
//!
//! The surviving tokens are joined with single spaces.

pub mod pipeline;
pub mod punct;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

pub use pipeline::{normalize, normalize_detailed, NormalizedMessage, Normalizer};
pub use punct::{lowercase, strip_punctuation};
pub use stemmer::{stem, stem_with, SUFFIXES};
pub use stopwords::{is_stopword, remove_stopwords, STOPWORDS};
pub use tokenizer::tokenize;
pub use traits::TextNormalizer;

#[cfg(test)]
mod tests;
