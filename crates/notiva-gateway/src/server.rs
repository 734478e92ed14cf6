// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway. The router
//! is exposed separately from the listener so tests can drive it in-process.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use notiva_core::{NotivaError, RequestStore};
use notiva_pipeline::Orchestrator;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Request store shared with the pipeline.
    pub store: Arc<dyn RequestStore>,
    /// Orchestrator used to spawn detached pipeline runs.
    pub orchestrator: Arc<Orchestrator>,
}

/// Gateway server configuration (mirrors GatewayConfig from notiva-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Builds the gateway router:
/// - POST /v1/requests
/// - POST /v1/requests/{id}/process
/// - GET /v1/requests/{id}
/// - GET /health
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/requests", post(handlers::post_requests))
        .route("/v1/requests/{id}/process", post(handlers::post_process))
        .route("/v1/requests/{id}", get(handlers::get_request))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server and serve until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), NotivaError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NotivaError::Channel {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| NotivaError::Channel {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
