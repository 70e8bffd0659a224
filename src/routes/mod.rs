//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay serves a single pass-through endpoint for the document viewer
//! plus a health probe. CORS is fully permissive: the whole point of the
//! relay is to be callable from whatever origin hosts the viewer.

pub mod relay;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the relay router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/proxy-pdf", get(relay::proxy_pdf))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
