use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmsError {
    #[error("Classifier not initialized: artifacts were not loaded")]
    NotInitialized,
    #[error("Failed to load artifact {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Inference error: {0}")]
    Inference(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SmsError {
    pub fn artifact_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ArtifactLoad { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, SmsError>;
