use crate::features::FeatureVector;
use sms_core::{Label, Result};

/// Maps a batch of documents to fixed-dimension feature vectors.
pub trait TextVectorizer: Send + Sync {
    /// One vector per input document, in input order.
    fn transform(&self, docs: &[&str]) -> Result<Vec<FeatureVector>>;

    /// Dimension of every produced vector.
    fn dimension(&self) -> usize;
}

/// Maps a batch of feature vectors to binary labels.
pub trait BinaryClassifier: Send + Sync {
    /// One label per input row, in input order.
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<Label>>;

    /// Dimension of the rows this classifier accepts.
    fn n_features(&self) -> usize;
}
