//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub storage: ServiceHealth,
}

/// Service health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies storage connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let ping = match &state.database {
        Some(db) => db.ping().await.map_err(|e| e.to_string()),
        None => Ok(()),
    };

    let storage = match ping {
        Ok(()) => ServiceHealth {
            backend: state.storage().to_string(),
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => ServiceHealth {
            backend: state.storage().to_string(),
            status: "unhealthy".to_string(),
            error: Some(e),
        },
    };

    let all_healthy = storage.status == "healthy";

    let response = HealthResponse {
        service: state.config.service.service_name.clone(),
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceStatus { storage },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
