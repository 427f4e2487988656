//! Fitted binary classifiers.

use crate::features::FeatureVector;
use crate::traits::BinaryClassifier;
use serde::{Deserialize, Serialize};
use sms_core::{Label, Result, SmsError};

/// Serialized classifier artifact, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierModel {
    MultinomialNb(MultinomialNb),
    Linear(LinearModel),
}

/// Multinomial naive Bayes: joint log-likelihood per class, highest wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    pub classes: Vec<i64>,
    pub class_log_prior: Vec<f64>,
    /// One row per class, one column per feature.
    pub feature_log_prob: Vec<Vec<f64>>,
}

/// Linear decision function (logistic regression, linear SVM).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// `[negative, positive]` class values.
    pub classes: Vec<i64>,
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl MultinomialNb {
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(SmsError::InvalidArtifact("multinomial_nb has no classes".into()));
        }
        if self.class_log_prior.len() != self.classes.len()
            || self.feature_log_prob.len() != self.classes.len()
        {
            return Err(SmsError::InvalidArtifact(format!(
                "multinomial_nb: {} classes, {} priors, {} probability rows",
                self.classes.len(),
                self.class_log_prior.len(),
                self.feature_log_prob.len()
            )));
        }
        let n_features = self.n_features();
        if let Some(row) = self.feature_log_prob.iter().find(|r| r.len() != n_features) {
            return Err(SmsError::InvalidArtifact(format!(
                "multinomial_nb: ragged feature_log_prob ({} vs {} columns)",
                row.len(),
                n_features
            )));
        }
        let has_nan = self
            .class_log_prior
            .iter()
            .chain(self.feature_log_prob.iter().flatten())
            .any(|v| v.is_nan());
        if has_nan {
            return Err(SmsError::InvalidArtifact("multinomial_nb contains NaN".into()));
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.first().map(Vec::len).unwrap_or(0)
    }

    /// Joint log-likelihood of `row` under each class.
    pub fn joint_log_likelihood(&self, row: &FeatureVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, probs)| prior + row.dot(probs))
            .collect()
    }

    fn predict_one(&self, row: &FeatureVector) -> Label {
        let jll = self.joint_log_likelihood(row);
        // Ties go to the lowest class index.
        let mut best = 0;
        for (i, score) in jll.iter().enumerate().skip(1) {
            if *score > jll[best] {
                best = i;
            }
        }
        Label(self.classes[best])
    }
}

impl LinearModel {
    pub fn validate(&self) -> Result<()> {
        if self.classes.len() != 2 {
            return Err(SmsError::InvalidArtifact(format!(
                "linear model needs exactly 2 classes, got {}",
                self.classes.len()
            )));
        }
        if self.coef.iter().any(|v| !v.is_finite()) || !self.intercept.is_finite() {
            return Err(SmsError::InvalidArtifact(
                "linear model contains non-finite weights".into(),
            ));
        }
        Ok(())
    }

    pub fn decision_function(&self, row: &FeatureVector) -> f64 {
        row.dot(&self.coef) + self.intercept
    }

    fn predict_one(&self, row: &FeatureVector) -> Label {
        if self.decision_function(row) > 0.0 {
            Label(self.classes[1])
        } else {
            Label(self.classes[0])
        }
    }
}

impl ClassifierModel {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::MultinomialNb(m) => m.validate(),
            Self::Linear(m) => m.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MultinomialNb(_) => "multinomial_nb",
            Self::Linear(_) => "linear",
        }
    }
}

impl BinaryClassifier for ClassifierModel {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<Label>> {
        let expected = self.n_features();
        rows.iter()
            .map(|row| {
                if row.dim() != expected {
                    return Err(SmsError::DimensionMismatch { expected, got: row.dim() });
                }
                Ok(match self {
                    Self::MultinomialNb(m) => m.predict_one(row),
                    Self::Linear(m) => m.predict_one(row),
                })
            })
            .collect()
    }

    fn n_features(&self) -> usize {
        match self {
            Self::MultinomialNb(m) => m.n_features(),
            Self::Linear(m) => m.coef.len(),
        }
    }
}
