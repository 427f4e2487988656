//! Bag-of-words vectorizer with optional TF-IDF weighting.
//!
//! Reproduces the inference path of a fitted scikit-learn `TfidfVectorizer`
//! (or `CountVectorizer` when no idf weights are present) from its exported
//! parameters.

use crate::features::FeatureVector;
use crate::traits::TextVectorizer;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use sms_core::{Result, SmsError};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";
pub const WORD_ANALYZER: &str = "word";

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Serialized vectorizer artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VectorizerDocument {
    #[serde(alias = "count")]
    Tfidf(TfidfParams),
}

/// Fitted parameters of a TF-IDF / count vectorizer.
///
/// Unknown fields are rejected so that an export carrying options this
/// vectorizer does not reproduce fails at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TfidfParams {
    pub vocabulary: HashMap<String, usize>,
    #[serde(default)]
    pub idf: Option<Vec<f64>>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub binary: bool,
    /// `null` and `"none"` both disable row normalization.
    #[serde(default = "default_norm", deserialize_with = "deserialize_norm")]
    pub norm: Option<Norm>,
    /// Only word analysis is supported.
    #[serde(default = "default_analyzer")]
    pub analyzer: String,
    /// Accent stripping is not supported; must be absent or `null`.
    #[serde(default)]
    pub strip_accents: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.into()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_analyzer() -> String {
    WORD_ANALYZER.into()
}

fn deserialize_norm<'de, D>(deserializer: D) -> std::result::Result<Option<Norm>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("none") => Ok(None),
        Some("l1") => Ok(Some(Norm::L1)),
        Some("l2") => Ok(Some(Norm::L2)),
        Some(other) => Err(de::Error::unknown_variant(other, &["l1", "l2", "none"])),
    }
}

impl TfidfParams {
    /// Count-only parameters over `vocabulary`, with every other field at its default.
    pub fn with_vocabulary(vocabulary: HashMap<String, usize>) -> Self {
        Self {
            vocabulary,
            idf: None,
            lowercase: true,
            token_pattern: default_token_pattern(),
            ngram_range: default_ngram_range(),
            stop_words: Vec::new(),
            sublinear_tf: false,
            binary: false,
            norm: default_norm(),
            analyzer: default_analyzer(),
            strip_accents: None,
        }
    }
}

fn invalid(reason: String) -> SmsError {
    SmsError::InvalidArtifact(reason)
}

/// A validated, ready-to-use vectorizer.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    params: TfidfParams,
    token_re: Regex,
    stop_words: HashSet<String>,
}

impl TfidfVectorizer {
    pub fn from_document(doc: VectorizerDocument) -> Result<Self> {
        match doc {
            VectorizerDocument::Tfidf(params) => Self::new(params),
        }
    }

    pub fn new(params: TfidfParams) -> Result<Self> {
        if params.analyzer != WORD_ANALYZER {
            return Err(invalid(format!("unsupported analyzer {:?}", params.analyzer)));
        }
        if let Some(mode) = &params.strip_accents {
            return Err(invalid(format!("unsupported strip_accents {:?}", mode)));
        }

        let dim = params.vocabulary.len();
        let mut seen = vec![false; dim];
        for (term, &col) in &params.vocabulary {
            if col >= dim {
                return Err(invalid(format!(
                    "vocabulary column {} for term {:?} out of range (size {})",
                    col, term, dim
                )));
            }
            if std::mem::replace(&mut seen[col], true) {
                return Err(invalid(format!("vocabulary column {} assigned twice", col)));
            }
        }
        if let Some(idf) = &params.idf {
            if idf.len() != dim {
                return Err(invalid(format!(
                    "idf has {} weights, vocabulary has {} terms",
                    idf.len(),
                    dim
                )));
            }
            if idf.iter().any(|w| !w.is_finite()) {
                return Err(invalid("idf contains non-finite weights".into()));
            }
        }
        let (min_n, max_n) = params.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(invalid(format!("invalid ngram_range ({}, {})", min_n, max_n)));
        }
        let token_re = Regex::new(&params.token_pattern)
            .map_err(|e| invalid(format!("bad token_pattern: {}", e)))?;
        if token_re.captures_len() > 2 {
            return Err(invalid("token_pattern may contain at most one capture group".into()));
        }
        let stop_words = params.stop_words.iter().cloned().collect();
        Ok(Self { params, token_re, stop_words })
    }

    pub fn params(&self) -> &TfidfParams {
        &self.params
    }

    pub fn vocabulary_size(&self) -> usize {
        self.params.vocabulary.len()
    }

    /// Split a document into the terms the vocabulary is keyed by.
    pub fn analyze(&self, doc: &str) -> Vec<String> {
        let text = if self.params.lowercase { doc.to_lowercase() } else { doc.to_string() };
        let tokens: Vec<&str> = if self.token_re.captures_len() == 2 {
            self.token_re
                .captures_iter(&text)
                .filter_map(|c| c.get(1).map(|m| m.as_str()))
                .collect()
        } else {
            self.token_re.find_iter(&text).map(|m| m.as_str()).collect()
        };
        let tokens: Vec<&str> = tokens
            .into_iter()
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let (min_n, max_n) = self.params.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    fn transform_one(&self, doc: &str) -> Result<FeatureVector> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(doc) {
            if let Some(&col) = self.params.vocabulary.get(&term) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, tf)| {
                let mut w = if self.params.binary { 1.0 } else { tf };
                if self.params.sublinear_tf {
                    w = 1.0 + w.ln();
                }
                if let Some(idf) = &self.params.idf {
                    w *= idf[col];
                }
                (col, w)
            })
            .collect();

        let mut row = FeatureVector::from_entries(self.vocabulary_size(), entries)?;
        let norm = match self.params.norm {
            Some(Norm::L1) => row.l1_norm(),
            Some(Norm::L2) => row.l2_norm(),
            None => 0.0,
        };
        if norm > 0.0 {
            row.scale(1.0 / norm);
        }
        Ok(row)
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn transform(&self, docs: &[&str]) -> Result<Vec<FeatureVector>> {
        docs.iter().map(|d| self.transform_one(d)).collect()
    }

    fn dimension(&self) -> usize {
        self.vocabulary_size()
    }
}
