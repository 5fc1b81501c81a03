//! Gender value object for the lung-risk form.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Patient gender as collected by the step-1 radio input.
///
/// Encoded as 1 (male) / 0 (female) in the feature vector, matching the
/// encoding the lung classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses the one-letter form code ("M" or "F", case-insensitive).
    pub fn try_from_code(code: &str) -> Result<Self, ValidationError> {
        match code.trim() {
            "M" | "m" => Ok(Gender::Male),
            "F" | "f" => Ok(Gender::Female),
            "" => Err(ValidationError::empty_field("gender")),
            other => Err(ValidationError::invalid_format(
                "gender",
                format!("expected 'M' or 'F', got '{}'", other),
            )),
        }
    }

    /// Returns the numeric encoding used in the feature vector.
    pub fn encoded(&self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }

    /// Returns the one-letter form code.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
