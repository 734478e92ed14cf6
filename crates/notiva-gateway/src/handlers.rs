// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /v1/requests, POST /v1/requests/{id}/process,
//! GET /v1/requests/{id}, and GET /health.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use notiva_core::{RequestId, RequestStatus};

use crate::server::GatewayState;

/// Request body for POST /v1/requests.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Free-form natural-language text to turn into a notification.
    pub user_input: String,
}

/// Response body for POST /v1/requests.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Identifier of the newly created request.
    pub id: String,
}

/// Response body for GET /v1/requests/{id}.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Request identifier.
    pub id: String,
    /// Current lifecycle status.
    pub status: RequestStatus,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// POST /v1/requests
///
/// Creates a request record in `queued` status and returns its identifier.
pub async fn post_requests(
    State(state): State<GatewayState>,
    Json(body): Json<SubmitRequest>,
) -> impl IntoResponse {
    let id = state.store.create(body.user_input).await;
    info!(id = %id.0, "request submitted");
    (StatusCode::CREATED, Json(SubmitResponse { id: id.0 }))
}

/// POST /v1/requests/{id}/process
///
/// Transitions a queued request to `processing` and schedules the pipeline
/// orchestrator as a detached task. The response does not wait for the
/// pipeline: completion is observed through the status endpoint.
///
/// Returns 404 for an unknown id and 409 for a record that is not `queued`,
/// so a second process call cannot start an overlapping pipeline run.
pub async fn post_process(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Response {
    let request_id = RequestId(id);

    let record = match state.store.get(&request_id).await {
        Ok(record) => record,
        Err(_) => return not_found(&request_id),
    };

    if record.status != RequestStatus::Queued {
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!(
                    "request {} is {}, not queued",
                    request_id.0, record.status
                ),
            }),
        )
            .into_response();
    }

    if state
        .store
        .set_status(&request_id, RequestStatus::Processing)
        .await
        .is_err()
    {
        return not_found(&request_id);
    }

    info!(id = %request_id.0, "request accepted for processing");
    state.orchestrator.spawn(request_id, record.user_input);

    StatusCode::OK.into_response()
}

/// GET /v1/requests/{id}
///
/// Returns the request's current status. The status value is the only
/// externally observable signal; no failure detail is exposed.
pub async fn get_request(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Response {
    let request_id = RequestId(id);

    match state.store.get(&request_id).await {
        Ok(record) => Json(StatusResponse {
            id: request_id.0,
            status: record.status,
        })
        .into_response(),
        Err(_) => not_found(&request_id),
    }
}

/// GET /health
///
/// Unauthenticated liveness endpoint.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn not_found(id: &RequestId) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("request not found: {}", id.0),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_deserializes() {
        let json = r#"{"user_input": "Send email to a@b.com"}"#;
        let req: SubmitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_input, "Send email to a@b.com");
    }

    #[test]
    fn status_response_serializes_lowercase_status() {
        let resp = StatusResponse {
            id: "req-1".to_string(),
            status: RequestStatus::Processing,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"processing\""));
        assert!(json.contains("\"id\":\"req-1\""));
    }

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
    }

    #[test]
    fn error_response_serializes() {
        let resp = ErrorResponse {
            error: "request not found: x".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("request not found: x"));
    }
}
