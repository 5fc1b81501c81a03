//! Linear classifier artifact, serialized to JSON by the external training
//! process.
//!
//! The artifact schema is owned by the trainer; this adapter only
//! deserializes it and evaluates the decision function.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ports::{ClassLabel, ClassifierModel, ModelError};

/// A binary linear classifier: dot(weights, features) + intercept.
///
/// `classes` holds the negative class first, the positive class second; a
/// decision score above zero selects the positive class.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearArtifact {
    name: String,
    n_features: usize,
    weights: Vec<f64>,
    intercept: f64,
    classes: Vec<ClassLabel>,
}

impl LinearArtifact {
    /// Loads and validates an artifact from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: LinearArtifact =
            serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        artifact.check_shape(path)?;
        Ok(artifact)
    }

    fn check_shape(&self, path: &Path) -> Result<(), ModelError> {
        if self.weights.len() != self.n_features {
            return Err(ModelError::InvalidArtifact {
                path: path.to_path_buf(),
                reason: format!(
                    "weights length {} disagrees with n_features {}",
                    self.weights.len(),
                    self.n_features
                ),
            });
        }
        if self.classes.len() != 2 {
            return Err(ModelError::InvalidArtifact {
                path: path.to_path_buf(),
                reason: format!("expected exactly 2 classes, got {}", self.classes.len()),
            });
        }
        Ok(())
    }

    /// Decision function value for a feature vector of the right arity.
    fn decision_score(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl ClassifierModel for LinearArtifact {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<ClassLabel, ModelError> {
        if features.len() != self.n_features {
            return Err(ModelError::FeatureArityMismatch {
                model: self.name.clone(),
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let score = self.decision_score(features);
        let label = if score > 0.0 {
            self.classes[1].clone()
        } else {
            self.classes[0].clone()
        };
        Ok(label)
    }
}
