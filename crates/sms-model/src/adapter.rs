//! Classifier adapter: the single entry point for inference.

use crate::artifact::Artifacts;
use serde::Serialize;
use sms_core::{ArtifactConfig, Label, Result, SmsError, Verdict};
use sms_text::{Normalizer, TextNormalizer};
use std::sync::Arc;
use tracing::debug;

/// Outcome of classifying one raw message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub canonical: String,
    pub label: Label,
    pub verdict: Verdict,
}

/// Wraps the loaded artifacts. Cloning shares them.
#[derive(Clone)]
pub struct ClassifierAdapter {
    artifacts: Option<Arc<Artifacts>>,
    normalizer: Arc<dyn TextNormalizer>,
}

impl ClassifierAdapter {
    pub fn new(artifacts: Arc<Artifacts>) -> Self {
        Self { artifacts: Some(artifacts), normalizer: Arc::new(Normalizer::new()) }
    }

    /// An adapter with no artifacts; every `classify` call fails with
    /// [`SmsError::NotInitialized`].
    pub fn uninitialized() -> Self {
        Self { artifacts: None, normalizer: Arc::new(Normalizer::new()) }
    }

    pub fn from_config(config: &ArtifactConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(Artifacts::load(config)?)))
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn TextNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn is_ready(&self) -> bool {
        self.artifacts.is_some()
    }

    pub fn artifacts(&self) -> Result<&Artifacts> {
        self.artifacts.as_deref().ok_or(SmsError::NotInitialized)
    }

    /// Classify already-normalized text. The empty string is a valid input.
    pub fn classify(&self, canonical: &str) -> Result<Label> {
        let artifacts = self.artifacts()?;

        let rows = artifacts.vectorizer().transform(&[canonical])?;
        if rows.len() != 1 {
            return Err(SmsError::Inference(format!(
                "vectorizer returned {} rows for 1 document",
                rows.len()
            )));
        }
        let labels = artifacts.classifier().predict(&rows)?;
        let &[label] = labels.as_slice() else {
            return Err(SmsError::Inference(format!(
                "classifier returned {} labels for 1 row",
                labels.len()
            )));
        };

        debug!(nnz = rows[0].nnz(), label = label.value(), "classified");
        Ok(label)
    }

    /// Normalize a raw message, classify it, and map the label to a verdict.
    pub fn classify_message(&self, raw: &str) -> Result<Prediction> {
        let canonical = self.normalizer.normalize(raw);
        let label = self.classify(&canonical)?;
        Ok(Prediction { canonical, label, verdict: label.verdict() })
    }
}

impl Default for ClassifierAdapter {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter").field("artifacts", &self.artifacts).finish()
    }
}
