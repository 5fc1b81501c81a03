//! HTTP adapter for the screening endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ScreeningAppState;
pub use routes::screening_router;
