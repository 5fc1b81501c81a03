//! Axum router configuration for the screening endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{assess_lung_risk, health_check, predict_drug_response, ScreeningAppState};

/// Create the screening API router.
///
/// # Routes
///
/// - `POST /lung` - Step 1: lung-cancer risk check
/// - `POST /drug-response` - Step 2: drug-response check
pub fn screening_routes() -> Router<ScreeningAppState> {
    Router::new()
        .route("/lung", post(assess_lung_risk))
        .route("/drug-response", post(predict_drug_response))
}

/// Create the complete screening module router.
///
/// Suitable for mounting at `/api/screening`.
pub fn screening_router() -> Router<ScreeningAppState> {
    screening_routes()
}

/// Create the health router, mounted at the application root.
pub fn health_router() -> Router<ScreeningAppState> {
    Router::new().route("/health", get(health_check))
}
