//! PulmoScreen service entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pulmoscreen::adapters::http::screening::routes::health_router;
use pulmoscreen::adapters::http::{screening_router, ui_router, ScreeningAppState};
use pulmoscreen::adapters::model::ModelSet;
use pulmoscreen::application::handlers::{AssessLungRiskHandler, PredictDrugResponseHandler};
use pulmoscreen::config::AppConfig;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("pulmoscreen failed to start: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    config.validate()?;

    // Both classifiers are loaded once here and held for the process
    // lifetime; a failed load aborts startup.
    let models = ModelSet::load(&config.models)?;

    let state = ScreeningAppState {
        model_names: models.model_names(),
        lung_handler: Arc::new(AssessLungRiskHandler::new(models.lung)),
        drug_handler: Arc::new(PredictDrugResponseHandler::new(models.drug)),
    };

    let app = Router::new()
        .merge(ui_router())
        .merge(health_router())
        .nest("/api/screening", screening_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "PulmoScreen listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
}
