//! Data transfer objects for the screening HTTP endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::handlers::{
    AssessLungRiskCommand, AssessLungRiskResult, PredictDrugResponseCommand,
    PredictDrugResponseResult,
};
use crate::domain::foundation::DomainError;
use crate::domain::screening::{DrugResponseVerdict, LungRiskVerdict};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Step-1 form submission: the 15 lung-risk fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LungAssessmentRequest {
    /// "M" or "F"
    pub gender: String,
    pub age: f64,
    /// Categorical sliders, 0 to 2
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

impl From<LungAssessmentRequest> for AssessLungRiskCommand {
    fn from(req: LungAssessmentRequest) -> Self {
        Self {
            gender: req.gender,
            age: req.age,
            smoking: req.smoking,
            yellow_fingers: req.yellow_fingers,
            anxiety: req.anxiety,
            peer_pressure: req.peer_pressure,
            chronic_disease: req.chronic_disease,
            fatigue: req.fatigue,
            allergy: req.allergy,
            wheezing: req.wheezing,
            alcohol_consuming: req.alcohol_consuming,
            coughing: req.coughing,
            shortness_of_breath: req.shortness_of_breath,
            swallowing_difficulty: req.swallowing_difficulty,
            chest_pain: req.chest_pain,
        }
    }
}

/// Step-2 form submission: the 12 drug-response fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugResponseRequest {
    pub age: f64,
    /// 1 = male, 0 = female
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

impl From<DrugResponseRequest> for PredictDrugResponseCommand {
    fn from(req: DrugResponseRequest) -> Self {
        Self {
            age: req.age,
            sex: req.sex,
            weight: req.weight,
            blood_pressure: req.blood_pressure,
            cholesterol: req.cholesterol,
            glucose: req.glucose,
            genetic_marker_1: req.genetic_marker_1,
            genetic_marker_2: req.genetic_marker_2,
            drug_dosage: req.drug_dosage,
            drug_duration: req.drug_duration,
            previous_conditions: req.previous_conditions,
            liver_function_score: req.liver_function_score,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response for a lung-risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LungAssessmentResponse {
    pub assessment_id: Uuid,
    pub verdict: LungRiskVerdict,
    pub message: String,
    /// Whether the UI should reveal the drug-response step.
    pub show_drug_step: bool,
    pub assessed_at: DateTime<Utc>,
}

impl From<AssessLungRiskResult> for LungAssessmentResponse {
    fn from(result: AssessLungRiskResult) -> Self {
        Self {
            assessment_id: result.assessment_id,
            verdict: result.verdict,
            message: result.message.to_string(),
            show_drug_step: result.show_drug_step,
            assessed_at: result.assessed_at,
        }
    }
}

/// Response for a drug-response prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugResponseResponse {
    pub assessment_id: Uuid,
    pub verdict: DrugResponseVerdict,
    pub message: String,
    pub assessed_at: DateTime<Utc>,
}

impl From<PredictDrugResponseResult> for DrugResponseResponse {
    fn from(result: PredictDrugResponseResult) -> Self {
        Self {
            assessment_id: result.assessment_id,
            verdict: result.verdict,
            message: result.message.to_string(),
            assessed_at: result.assessed_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub models: Vec<String>,
}

/// Error body returned for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub details: std::collections::HashMap<String, String>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}
