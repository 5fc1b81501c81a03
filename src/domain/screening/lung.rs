//! Step 1: lung-cancer risk check.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Gender, Severity};

/// Number of features the lung classifier expects.
pub const LUNG_FEATURE_COUNT: usize = 15;

/// Class label the lung classifier emits for an at-risk patient.
const POSITIVE_LABEL: &str = "YES";

/// One lung-risk form submission.
///
/// Field order is the feature order the classifier was trained on; do not
/// reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LungRiskInput {
    pub gender: Gender,
    pub age: f64,
    pub smoking: Severity,
    pub yellow_fingers: Severity,
    pub anxiety: Severity,
    pub peer_pressure: Severity,
    pub chronic_disease: Severity,
    pub fatigue: Severity,
    pub allergy: Severity,
    pub wheezing: Severity,
    pub alcohol_consuming: Severity,
    pub coughing: Severity,
    pub shortness_of_breath: Severity,
    pub swallowing_difficulty: Severity,
    pub chest_pain: Severity,
}

impl LungRiskInput {
    /// Assembles the fixed-order feature vector for the lung classifier.
    pub fn feature_vector(&self) -> [f64; LUNG_FEATURE_COUNT] {
        [
            self.gender.encoded(),
            self.age,
            self.smoking.encoded(),
            self.yellow_fingers.encoded(),
            self.anxiety.encoded(),
            self.peer_pressure.encoded(),
            self.chronic_disease.encoded(),
            self.fatigue.encoded(),
            self.allergy.encoded(),
            self.wheezing.encoded(),
            self.alcohol_consuming.encoded(),
            self.coughing.encoded(),
            self.shortness_of_breath.encoded(),
            self.swallowing_difficulty.encoded(),
            self.chest_pain.encoded(),
        ]
    }
}

/// Outcome of the lung-cancer risk check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LungRiskVerdict {
    /// The classifier flagged elevated risk; the drug-response step follows.
    Elevated,
    /// No elevated risk detected.
    Low,
}

impl LungRiskVerdict {
    /// Maps the classifier's predicted label to a verdict.
    ///
    /// The mapping is total: the positive label maps to `Elevated`, every
    /// other label maps to `Low`.
    pub fn from_label(label: &str) -> Self {
        if label == POSITIVE_LABEL {
            LungRiskVerdict::Elevated
        } else {
            LungRiskVerdict::Low
        }
    }

    /// Returns the user-facing verdict message.
    pub fn message(&self) -> &'static str {
        match self {
            LungRiskVerdict::Elevated => {
                "⚠️ Lung Cancer Risk Detected. Please continue to drug response check."
            }
            LungRiskVerdict::Low => "✅ Low Risk of Lung Cancer.",
        }
    }

    /// Whether the drug-response step should be shown.
    pub fn show_drug_step(&self) -> bool {
        matches!(self, LungRiskVerdict::Elevated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_input() -> LungRiskInput {
        LungRiskInput {
            gender: Gender::Male,
            age: 63.0,
            smoking: Severity::High,
            yellow_fingers: Severity::Moderate,
            anxiety: Severity::Absent,
            peer_pressure: Severity::Absent,
            chronic_disease: Severity::Moderate,
            fatigue: Severity::High,
            allergy: Severity::Absent,
            wheezing: Severity::High,
            alcohol_consuming: Severity::Moderate,
            coughing: Severity::High,
            shortness_of_breath: Severity::High,
            swallowing_difficulty: Severity::Absent,
            chest_pain: Severity::Moderate,
        }
    }

    #[test]
    fn feature_vector_preserves_field_order() {
        let features = sample_input().feature_vector();
        assert_eq!(features.len(), LUNG_FEATURE_COUNT);
        assert_eq!(features[0], 1.0); // gender M
        assert_eq!(features[1], 63.0); // age
        assert_eq!(features[2], 2.0); // smoking
        assert_eq!(features[9], 2.0); // wheezing
        assert_eq!(features[14], 1.0); // chest pain
    }

    #[test]
    fn positive_label_maps_to_elevated() {
        let verdict = LungRiskVerdict::from_label("YES");
        assert_eq!(verdict, LungRiskVerdict::Elevated);
        assert!(verdict.show_drug_step());
        assert_eq!(
            verdict.message(),
            "⚠️ Lung Cancer Risk Detected. Please continue to drug response check."
        );
    }

    #[test]
    fn negative_label_maps_to_low() {
        let verdict = LungRiskVerdict::from_label("NO");
        assert_eq!(verdict, LungRiskVerdict::Low);
        assert!(!verdict.show_drug_step());
        assert_eq!(verdict.message(), "✅ Low Risk of Lung Cancer.");
    }

    #[test]
    fn label_mapping_is_case_sensitive() {
        // The artifact emits upper-case labels; anything else is not the
        // positive class.
        assert_eq!(LungRiskVerdict::from_label("yes"), LungRiskVerdict::Low);
    }

    proptest! {
        #[test]
        fn any_non_positive_label_maps_to_low(label in "[A-Za-z0-9]{0,8}") {
            prop_assume!(label != "YES");
            prop_assert_eq!(LungRiskVerdict::from_label(&label), LungRiskVerdict::Low);
        }
    }
}
