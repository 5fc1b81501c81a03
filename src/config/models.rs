//! Model artifact configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Configuration for the two pre-trained classifier artifacts.
///
/// Both artifacts are loaded once at startup and held for the process
/// lifetime; there is no reload path.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    /// Path to the lung-cancer risk classifier artifact
    #[serde(default = "default_lung_artifact_path")]
    pub lung_artifact_path: PathBuf,

    /// Path to the drug-response classifier artifact
    #[serde(default = "default_drug_artifact_path")]
    pub drug_artifact_path: PathBuf,
}

impl ModelsConfig {
    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lung_artifact_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired(
                "MODELS__LUNG_ARTIFACT_PATH",
            ));
        }
        if self.drug_artifact_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired(
                "MODELS__DRUG_ARTIFACT_PATH",
            ));
        }
        Ok(())
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            lung_artifact_path: default_lung_artifact_path(),
            drug_artifact_path: default_drug_artifact_path(),
        }
    }
}

fn default_lung_artifact_path() -> PathBuf {
    PathBuf::from("models/lung_risk_model.json")
}

fn default_drug_artifact_path() -> PathBuf {
    PathBuf::from("models/drug_response_model.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_models_config_is_valid() {
        assert!(ModelsConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_lung_path_is_rejected() {
        let config = ModelsConfig {
            lung_artifact_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn empty_drug_path_is_rejected() {
        let config = ModelsConfig {
            drug_artifact_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }
}
