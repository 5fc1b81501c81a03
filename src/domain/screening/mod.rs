//! The two screening steps.
//!
//! Each input record is ephemeral: it exists for one submit-predict-display
//! cycle, produces a verdict, and is discarded.

mod drug;
mod lung;

pub use drug::{DrugResponseInput, DrugResponseVerdict, DRUG_FEATURE_COUNT};
pub use lung::{LungRiskInput, LungRiskVerdict, LUNG_FEATURE_COUNT};
