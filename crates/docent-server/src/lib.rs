//! Docent server library logic.
//!
//! HTTP shell for the token issuance service: builds the axum router,
//! carries the read-only signing configuration in [`AppState`], and exposes
//! the health probe. All token construction lives in `docent-token`.

pub mod api;
pub mod config;

use axum::{
    extract::Extension,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all request handlers.
///
/// Read-only after startup: handlers only ever read the credentials and TTL,
/// so any number of concurrent requests can share it without coordination.
#[derive(Clone)]
pub struct AppState {
    /// Room-provider API key (the `iss` claim of issued tokens).
    pub api_key: String,
    /// Room-provider API secret used to sign tokens. Never logged.
    pub api_secret: String,
    /// Lifetime of issued tokens in seconds.
    pub token_ttl_secs: i64,
}

/// Health check handler.
///
/// Liveness only: reports that the process is up and accepting connections,
/// with no dependency or configuration checks.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy"
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/livekit/token", post(api::issue_token_handler))
        .route(
            "/api/livekit/agent-token",
            post(api::issue_agent_token_handler),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
