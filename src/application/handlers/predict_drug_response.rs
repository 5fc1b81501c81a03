//! PredictDrugResponseHandler - Command handler for the step-2 response check.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::domain::foundation::DomainError;
use crate::domain::screening::{DrugResponseInput, DrugResponseVerdict};
use crate::ports::ClassifierModel;

/// Command carrying the 12 raw drug-response form values.
#[derive(Debug, Clone)]
pub struct PredictDrugResponseCommand {
    pub age: f64,
    pub sex: f64,
    pub weight: f64,
    pub blood_pressure: f64,
    pub cholesterol: f64,
    pub glucose: f64,
    pub genetic_marker_1: f64,
    pub genetic_marker_2: f64,
    pub drug_dosage: f64,
    pub drug_duration: f64,
    pub previous_conditions: f64,
    pub liver_function_score: f64,
}

/// Result of a drug-response prediction.
#[derive(Debug, Clone)]
pub struct PredictDrugResponseResult {
    pub assessment_id: Uuid,
    pub verdict: DrugResponseVerdict,
    pub message: &'static str,
    pub assessed_at: DateTime<Utc>,
}

/// Handler for the drug-response check.
pub struct PredictDrugResponseHandler {
    model: Arc<dyn ClassifierModel>,
}

impl PredictDrugResponseHandler {
    pub fn new(model: Arc<dyn ClassifierModel>) -> Self {
        Self { model }
    }

    pub async fn handle(
        &self,
        cmd: PredictDrugResponseCommand,
    ) -> Result<PredictDrugResponseResult, DomainError> {
        // The step-2 fields are free numeric inputs; no range validation,
        // matching the form surface.
        let input = DrugResponseInput {
            age: cmd.age,
            sex: cmd.sex,
            weight: cmd.weight,
            blood_pressure: cmd.blood_pressure,
            cholesterol: cmd.cholesterol,
            glucose: cmd.glucose,
            genetic_marker_1: cmd.genetic_marker_1,
            genetic_marker_2: cmd.genetic_marker_2,
            drug_dosage: cmd.drug_dosage,
            drug_duration: cmd.drug_duration,
            previous_conditions: cmd.previous_conditions,
            liver_function_score: cmd.liver_function_score,
        };

        let features = input.feature_vector();
        let label = self.model.predict(&features)?;

        // Text-encoded classes still participate in the total mapping:
        // anything that is not class 1 is a non-responder.
        let class = label
            .as_class()
            .or_else(|| label.as_text().parse().ok())
            .unwrap_or(0);
        let verdict = DrugResponseVerdict::from_class(class);

        debug!(
            model = %self.model.name(),
            label = %label,
            verdict = ?verdict,
            "Drug response predicted"
        );

        Ok(PredictDrugResponseResult {
            assessment_id: Uuid::new_v4(),
            verdict,
            message: verdict.message(),
            assessed_at: Utc::now(),
        })
    }
}
