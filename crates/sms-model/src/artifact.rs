//! Loading fitted artifacts from disk.

use crate::classifier::ClassifierModel;
use crate::traits::{BinaryClassifier, TextVectorizer};
use crate::vectorizer::{TfidfVectorizer, VectorizerDocument};
use serde::de::DeserializeOwned;
use sms_core::{ArtifactConfig, Result, SmsError};
use std::fmt;
use std::path::Path;
use tracing::info;

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|e| SmsError::artifact_load(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| SmsError::artifact_load(path, e))
}

/// Load and validate a vectorizer document.
pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer> {
    let doc: VectorizerDocument = read_document(path)?;
    let vectorizer =
        TfidfVectorizer::from_document(doc).map_err(|e| SmsError::artifact_load(path, e))?;
    info!(
        path = %path.display(),
        vocabulary = vectorizer.vocabulary_size(),
        "loaded vectorizer"
    );
    Ok(vectorizer)
}

/// Load and validate a classifier document.
pub fn load_classifier(path: &Path) -> Result<ClassifierModel> {
    let model: ClassifierModel = read_document(path)?;
    model.validate().map_err(|e| SmsError::artifact_load(path, e))?;
    info!(
        path = %path.display(),
        kind = model.kind(),
        features = model.n_features(),
        "loaded classifier"
    );
    Ok(model)
}

/// An immutable vectorizer/classifier pair whose dimensions agree.
pub struct Artifacts {
    vectorizer: Box<dyn TextVectorizer>,
    classifier: Box<dyn BinaryClassifier>,
}

impl Artifacts {
    pub fn new(
        vectorizer: impl TextVectorizer + 'static,
        classifier: impl BinaryClassifier + 'static,
    ) -> Result<Self> {
        if vectorizer.dimension() != classifier.n_features() {
            return Err(SmsError::DimensionMismatch {
                expected: vectorizer.dimension(),
                got: classifier.n_features(),
            });
        }
        Ok(Self {
            vectorizer: Box::new(vectorizer),
            classifier: Box::new(classifier),
        })
    }

    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        let vectorizer = load_vectorizer(&config.vectorizer_path)?;
        let classifier = load_classifier(&config.model_path)?;
        Self::new(vectorizer, classifier)
    }

    pub fn vectorizer(&self) -> &dyn TextVectorizer {
        self.vectorizer.as_ref()
    }

    pub fn classifier(&self) -> &dyn BinaryClassifier {
        self.classifier.as_ref()
    }

    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }
}

impl fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifacts").field("dimension", &self.dimension()).finish()
    }
}
