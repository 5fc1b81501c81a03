//! HTTP handlers for the screening endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::warn;

use crate::application::handlers::{AssessLungRiskHandler, PredictDrugResponseHandler};
use crate::domain::foundation::DomainError;

use super::dto::{
    DrugResponseRequest, DrugResponseResponse, ErrorResponse, HealthResponse,
    LungAssessmentRequest, LungAssessmentResponse,
};

/// Application state for the screening endpoints.
#[derive(Clone)]
pub struct ScreeningAppState {
    /// Step-1 handler (injected)
    pub lung_handler: Arc<AssessLungRiskHandler>,
    /// Step-2 handler (injected)
    pub drug_handler: Arc<PredictDrugResponseHandler>,
    /// Names of the models loaded at startup, for the health endpoint
    pub model_names: Vec<String>,
}

fn error_reply(err: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        warn!(code = %err.code, message = %err.message, "Screening request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorResponse::from(&err)))
}

/// Run the step-1 lung-cancer risk check.
///
/// POST /api/screening/lung
pub async fn assess_lung_risk(
    State(state): State<ScreeningAppState>,
    Json(request): Json<LungAssessmentRequest>,
) -> impl IntoResponse {
    match state.lung_handler.handle(request.into()).await {
        Ok(result) => {
            (StatusCode::OK, Json(LungAssessmentResponse::from(result))).into_response()
        }
        Err(err) => error_reply(err).into_response(),
    }
}

/// Run the step-2 drug-response check.
///
/// POST /api/screening/drug-response
pub async fn predict_drug_response(
    State(state): State<ScreeningAppState>,
    Json(request): Json<DrugResponseRequest>,
) -> impl IntoResponse {
    match state.drug_handler.handle(request.into()).await {
        Ok(result) => (StatusCode::OK, Json(DrugResponseResponse::from(result))).into_response(),
        Err(err) => error_reply(err).into_response(),
    }
}

/// Liveness check reporting the loaded models.
///
/// GET /health
pub async fn health_check(State(state): State<ScreeningAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        models: state.model_names.clone(),
    })
}
