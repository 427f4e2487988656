//! Inference side of the SMS spam filter.
//!
//! Loads a fitted vectorizer/classifier pair from JSON artifact documents and
//! exposes [`ClassifierAdapter::classify`], which maps canonical text to a
//! single [`Label`](sms_core::Label).

pub mod adapter;
pub mod artifact;
pub mod classifier;
pub mod features;
pub mod traits;
pub mod vectorizer;

pub use adapter::{ClassifierAdapter, Prediction};
pub use artifact::{load_classifier, load_vectorizer, Artifacts};
pub use classifier::{ClassifierModel, LinearModel, MultinomialNb};
pub use features::FeatureVector;
pub use traits::{BinaryClassifier, TextVectorizer};
pub use vectorizer::{Norm, TfidfParams, TfidfVectorizer, VectorizerDocument};
