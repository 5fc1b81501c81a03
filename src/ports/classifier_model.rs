//! ClassifierModel port over the opaque pre-trained classifiers.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A predicted class as the model artifact encodes it.
///
/// The lung classifier emits text labels ("YES"/"NO"); the drug classifier
/// emits integer classes (1/0). The port surfaces whichever the artifact
/// carries and leaves interpretation to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Integer(i64),
    Text(String),
}

impl ClassLabel {
    /// Returns the label as text, stringifying integer classes.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ClassLabel::Text(s) => Cow::Borrowed(s),
            ClassLabel::Integer(i) => Cow::Owned(i.to_string()),
        }
    }

    /// Returns the label as an integer class, if it is one.
    pub fn as_class(&self) -> Option<i64> {
        match self {
            ClassLabel::Integer(i) => Some(*i),
            ClassLabel::Text(_) => None,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

/// Errors from loading or invoking a classifier.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid model artifact {path}: {reason}")]
    InvalidArtifact { path: PathBuf, reason: String },

    #[error("Model '{model}' expects {expected} features, got {actual}")]
    FeatureArityMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },
}

impl From<ModelError> for crate::domain::foundation::DomainError {
    fn from(err: ModelError) -> Self {
        use crate::domain::foundation::{DomainError, ErrorCode};
        DomainError::new(ErrorCode::ModelFailure, err.to_string())
    }
}

/// Port over a pre-trained classifier.
///
/// Implementations are read-only after construction and shared across
/// requests behind an `Arc`.
pub trait ClassifierModel: Send + Sync {
    /// Model name, as recorded in the artifact.
    fn name(&self) -> &str;

    /// Number of features the model expects.
    fn n_features(&self) -> usize;

    /// Predicts the class for one fixed-order feature vector.
    fn predict(&self, features: &[f64]) -> Result<ClassLabel, ModelError>;
}
