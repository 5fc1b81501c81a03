//! Mock classifier adapters for testing.

use std::sync::Mutex;

use crate::ports::{ClassLabel, ClassifierModel, ModelError};

/// A classifier that always returns the same label.
///
/// Records the feature vectors it was called with so tests can assert on
/// the assembled features.
pub struct FixedClassifier {
    name: String,
    n_features: usize,
    label: ClassLabel,
    calls: Mutex<Vec<Vec<f64>>>,
}

impl FixedClassifier {
    pub fn new(name: impl Into<String>, n_features: usize, label: ClassLabel) -> Self {
        Self {
            name: name.into(),
            n_features,
            label,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Feature vectors passed to `predict`, in call order.
    pub fn recorded_calls(&self) -> Vec<Vec<f64>> {
        self.calls.lock().unwrap().clone()
    }
}

impl ClassifierModel for FixedClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<ClassLabel, ModelError> {
        self.calls.lock().unwrap().push(features.to_vec());
        Ok(self.label.clone())
    }
}

/// A classifier whose predictions always fail.
pub struct FailingClassifier {
    name: String,
    n_features: usize,
}

impl FailingClassifier {
    pub fn new(name: impl Into<String>, n_features: usize) -> Self {
        Self {
            name: name.into(),
            n_features,
        }
    }
}

impl ClassifierModel for FailingClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<ClassLabel, ModelError> {
        Err(ModelError::FeatureArityMismatch {
            model: self.name.clone(),
            expected: self.n_features,
            actual: features.len(),
        })
    }
}
