//! Command handlers for the two screening steps.

mod assess_lung_risk;
mod predict_drug_response;

pub use assess_lung_risk::{AssessLungRiskCommand, AssessLungRiskHandler, AssessLungRiskResult};
pub use predict_drug_response::{
    PredictDrugResponseCommand, PredictDrugResponseHandler, PredictDrugResponseResult,
};
