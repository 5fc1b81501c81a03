//! Embedded form surface.
//!
//! Serves the two-step screening form as a single static page. The page
//! posts to the JSON endpoints and reveals step 2 only when the lung
//! response carries `show_drug_step = true`.

use axum::{response::Html, routing::get, Router};

const INDEX_HTML: &str = include_str!("index.html");

/// GET / - the two-step screening form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Create the UI router, mounted at the application root.
pub fn ui_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/", get(index))
}
