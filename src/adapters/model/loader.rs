//! Startup loader for the two classifier artifacts.

use std::sync::Arc;

use tracing::info;

use crate::config::ModelsConfig;
use crate::domain::screening::{DRUG_FEATURE_COUNT, LUNG_FEATURE_COUNT};
use crate::ports::{ClassifierModel, ModelError};

use super::linear_artifact::LinearArtifact;

/// The two models loaded at startup, shared read-only for the process
/// lifetime.
#[derive(Clone)]
pub struct ModelSet {
    pub lung: Arc<dyn ClassifierModel>,
    pub drug: Arc<dyn ClassifierModel>,
}

impl ModelSet {
    /// Loads both artifacts from the configured paths.
    ///
    /// Any failure aborts startup: there is no partial mode with one model.
    /// Artifacts whose arity disagrees with the screening forms are
    /// rejected here rather than at request time.
    pub fn load(config: &ModelsConfig) -> Result<Self, ModelError> {
        let lung = Self::load_one(
            &config.lung_artifact_path,
            "lung risk",
            LUNG_FEATURE_COUNT,
        )?;
        let drug = Self::load_one(
            &config.drug_artifact_path,
            "drug response",
            DRUG_FEATURE_COUNT,
        )?;

        Ok(Self {
            lung: Arc::new(lung),
            drug: Arc::new(drug),
        })
    }

    fn load_one(
        path: &std::path::Path,
        role: &str,
        expected_features: usize,
    ) -> Result<LinearArtifact, ModelError> {
        let artifact = LinearArtifact::from_file(path)?;

        if artifact.n_features() != expected_features {
            return Err(ModelError::InvalidArtifact {
                path: path.to_path_buf(),
                reason: format!(
                    "{} model expects {} features, artifact declares {}",
                    role,
                    expected_features,
                    artifact.n_features()
                ),
            });
        }

        info!(
            model = %artifact.name(),
            path = %path.display(),
            n_features = artifact.n_features(),
            "Loaded {} classifier",
            role
        );
        Ok(artifact)
    }

    /// Names of the loaded models, for the health endpoint.
    pub fn model_names(&self) -> Vec<String> {
        vec![self.lung.name().to_string(), self.drug.name().to_string()]
    }
}
