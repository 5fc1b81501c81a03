//! Severity value object for the step-1 symptom sliders (0 to 2 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Categorical symptom severity: 0 (absent) to 2 (high).
///
/// The step-1 sliders constrain input to this range; construction is the
/// only place the range is enforced, prediction does not re-validate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    #[default]
    Absent = 0,
    Moderate = 1,
    High = 2,
}

impl Severity {
    /// Creates a Severity from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(Severity::Absent),
            1 => Ok(Severity::Moderate),
            2 => Ok(Severity::High),
            _ => Err(ValidationError::out_of_range(
                "severity",
                0,
                2,
                value as i32,
            )),
        }
    }

    /// Creates a Severity from a named form field, keeping the field name
    /// in the error for the caller.
    pub fn try_for_field(field: &str, value: u8) -> Result<Self, ValidationError> {
        Self::try_from_u8(value)
            .map_err(|_| ValidationError::out_of_range(field, 0, 2, value as i32))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the numeric encoding used in the feature vector.
    pub fn encoded(&self) -> f64 {
        self.value() as f64
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Absent => "Absent",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
