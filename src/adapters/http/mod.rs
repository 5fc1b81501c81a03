//! HTTP adapters - REST API and form surface.

pub mod screening;
pub mod ui;

// Re-export key types for convenience
pub use screening::screening_router;
pub use screening::ScreeningAppState;
pub use ui::ui_router;
