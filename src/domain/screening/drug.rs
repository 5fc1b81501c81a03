//! Step 2: drug-response check.

use serde::{Deserialize, Serialize};

/// Number of features the drug-response classifier expects.
pub const DRUG_FEATURE_COUNT: usize = 12;

/// Class the drug classifier emits for a likely responder.
const RESPONDER_CLASS: i64 = 1;

/// One drug-response form submission.
///
/// All fields are free numeric inputs; the UI does not constrain their
/// ranges and neither does prediction. Field order is the feature order the
/// classifier was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugResponseInput {
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

impl DrugResponseInput {
    /// Assembles the fixed-order feature vector for the drug classifier.
    pub fn feature_vector(&self) -> [f64; DRUG_FEATURE_COUNT] {
        [
            self.age,
            self.sex,
            self.weight,
            self.blood_pressure,
            self.cholesterol,
            self.glucose,
            self.genetic_marker_1,
            self.genetic_marker_2,
            self.drug_dosage,
            self.drug_duration,
            self.previous_conditions,
            self.liver_function_score,
        ]
    }
}

/// Outcome of the drug-response check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrugResponseVerdict {
    LikelyResponder,
    UnlikelyResponder,
}

impl DrugResponseVerdict {
    /// Maps the classifier's predicted class to a verdict.
    ///
    /// Class 1 is a likely responder; every other class is not.
    pub fn from_class(class: i64) -> Self {
        if class == RESPONDER_CLASS {
            DrugResponseVerdict::LikelyResponder
        } else {
            DrugResponseVerdict::UnlikelyResponder
        }
    }

    /// Returns the user-facing verdict message.
    pub fn message(&self) -> &'static str {
        match self {
            DrugResponseVerdict::LikelyResponder => "✅ Likely to Respond to Treatment",
            DrugResponseVerdict::UnlikelyResponder => "❌ Unlikely to Respond",
        }
    }
}
