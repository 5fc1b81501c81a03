//! AssessLungRiskHandler - Command handler for the step-1 risk check.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Gender, Severity};
use crate::domain::screening::{LungRiskInput, LungRiskVerdict};
use crate::ports::ClassifierModel;

/// Command carrying the 15 raw lung-risk form values.
#[derive(Debug, Clone)]
pub struct AssessLungRiskCommand {
    pub gender: String,
    pub age: f64,
    pub smoking: u8,
    pub yellow_fingers: u8,
    pub anxiety: u8,
    pub peer_pressure: u8,
    pub chronic_disease: u8,
    pub fatigue: u8,
    pub allergy: u8,
    pub wheezing: u8,
    pub alcohol_consuming: u8,
    pub coughing: u8,
    pub shortness_of_breath: u8,
    pub swallowing_difficulty: u8,
    pub chest_pain: u8,
}

/// Result of a lung-risk assessment.
#[derive(Debug, Clone)]
pub struct AssessLungRiskResult {
    pub assessment_id: Uuid,
    pub verdict: LungRiskVerdict,
    pub message: &'static str,
    pub show_drug_step: bool,
    pub assessed_at: DateTime<Utc>,
}

/// Handler for the lung-cancer risk check.
pub struct AssessLungRiskHandler {
    model: Arc<dyn ClassifierModel>,
}

impl AssessLungRiskHandler {
    pub fn new(model: Arc<dyn ClassifierModel>) -> Self {
        Self { model }
    }

    pub async fn handle(
        &self,
        cmd: AssessLungRiskCommand,
    ) -> Result<AssessLungRiskResult, DomainError> {
        // 1. Validate raw form values into domain types
        let input = Self::validate(cmd)?;

        // 2. Assemble the fixed-order feature vector and predict
        let features = input.feature_vector();
        let label = self.model.predict(&features)?;

        // 3. Map the predicted label to the verdict
        let verdict = LungRiskVerdict::from_label(&label.as_text());

        debug!(
            model = %self.model.name(),
            label = %label,
            verdict = ?verdict,
            "Lung risk assessed"
        );

        Ok(AssessLungRiskResult {
            assessment_id: Uuid::new_v4(),
            verdict,
            message: verdict.message(),
            show_drug_step: verdict.show_drug_step(),
            assessed_at: Utc::now(),
        })
    }

    fn validate(cmd: AssessLungRiskCommand) -> Result<LungRiskInput, DomainError> {
        Ok(LungRiskInput {
            gender: Gender::try_from_code(&cmd.gender)?,
            age: cmd.age,
            smoking: Severity::try_for_field("smoking", cmd.smoking)?,
            yellow_fingers: Severity::try_for_field("yellow_fingers", cmd.yellow_fingers)?,
            anxiety: Severity::try_for_field("anxiety", cmd.anxiety)?,
            peer_pressure: Severity::try_for_field("peer_pressure", cmd.peer_pressure)?,
            chronic_disease: Severity::try_for_field("chronic_disease", cmd.chronic_disease)?,
            fatigue: Severity::try_for_field("fatigue", cmd.fatigue)?,
            allergy: Severity::try_for_field("allergy", cmd.allergy)?,
            wheezing: Severity::try_for_field("wheezing", cmd.wheezing)?,
            alcohol_consuming: Severity::try_for_field(
                "alcohol_consuming",
                cmd.alcohol_consuming,
            )?,
            coughing: Severity::try_for_field("coughing", cmd.coughing)?,
            shortness_of_breath: Severity::try_for_field(
                "shortness_of_breath",
                cmd.shortness_of_breath,
            )?,
            swallowing_difficulty: Severity::try_for_field(
                "swallowing_difficulty",
                cmd.swallowing_difficulty,
            )?,
            chest_pain: Severity::try_for_field("chest_pain", cmd.chest_pain)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::model::mock::{FailingClassifier, FixedClassifier};
    use crate::domain::screening::LUNG_FEATURE_COUNT;
    use crate::ports::ClassLabel;

    fn sample_command() -> AssessLungRiskCommand {
        AssessLungRiskCommand {
            gender: "M".to_string(),
            age: 63.0,
            smoking: 2,
            yellow_fingers: 1,
            anxiety: 0,
            peer_pressure: 0,
            chronic_disease: 1,
            fatigue: 2,
            allergy: 0,
            wheezing: 2,
            alcohol_consuming: 1,
            coughing: 2,
            shortness_of_breath: 2,
            swallowing_difficulty: 0,
            chest_pain: 1,
        }
    }

    #[tokio::test]
    async fn positive_prediction_yields_elevated_verdict() {
        let model = Arc::new(FixedClassifier::new(
            "lung_risk",
            LUNG_FEATURE_COUNT,
            ClassLabel::Text("YES".to_string()),
        ));
        let handler = AssessLungRiskHandler::new(model.clone());

        let result = handler.handle(sample_command()).await.unwrap();

        assert_eq!(result.verdict, LungRiskVerdict::Elevated);
        assert!(result.show_drug_step);
        assert_eq!(
            result.message,
            "⚠️ Lung Cancer Risk Detected. Please continue to drug response check."
        );
    }

    #[tokio::test]
    async fn negative_prediction_yields_low_verdict() {
        let model = Arc::new(FixedClassifier::new(
            "lung_risk",
            LUNG_FEATURE_COUNT,
            ClassLabel::Text("NO".to_string()),
        ));
        let handler = AssessLungRiskHandler::new(model);

        let result = handler.handle(sample_command()).await.unwrap();

        assert_eq!(result.verdict, LungRiskVerdict::Low);
        assert!(!result.show_drug_step);
        assert_eq!(result.message, "✅ Low Risk of Lung Cancer.");
    }

    #[tokio::test]
    async fn feature_vector_reaches_the_model_in_order() {
        let model = Arc::new(FixedClassifier::new(
            "lung_risk",
            LUNG_FEATURE_COUNT,
            ClassLabel::Text("NO".to_string()),
        ));
        let handler = AssessLungRiskHandler::new(model.clone());

        handler.handle(sample_command()).await.unwrap();

        let calls = model.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![1.0, 63.0, 2.0, 1.0, 0.0, 0.0, 1.0, 2.0, 0.0, 2.0, 1.0, 2.0, 2.0, 0.0, 1.0]
        );
    }

    #[tokio::test]
    async fn out_of_range_severity_is_rejected_before_inference() {
        let model = Arc::new(FixedClassifier::new(
            "lung_risk",
            LUNG_FEATURE_COUNT,
            ClassLabel::Text("YES".to_string()),
        ));
        let handler = AssessLungRiskHandler::new(model.clone());

        let mut cmd = sample_command();
        cmd.wheezing = 3;
        let err = handler.handle(cmd).await.unwrap_err();

        assert!(err.is_client_error());
        assert!(model.recorded_calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_gender_is_rejected() {
        let model = Arc::new(FixedClassifier::new(
            "lung_risk",
            LUNG_FEATURE_COUNT,
            ClassLabel::Text("YES".to_string()),
        ));
        let handler = AssessLungRiskHandler::new(model);

        let mut cmd = sample_command();
        cmd.gender = "unknown".to_string();
        let err = handler.handle(cmd).await.unwrap_err();

        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn model_failure_surfaces_as_non_client_error() {
        let model = Arc::new(FailingClassifier::new("lung_risk", LUNG_FEATURE_COUNT));
        let handler = AssessLungRiskHandler::new(model);

        let err = handler.handle(sample_command()).await.unwrap_err();

        assert!(!err.is_client_error());
    }
}
