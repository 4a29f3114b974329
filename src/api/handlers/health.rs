//! Health check handler

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiState;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "status": "ok",
    "timestamp": "2025-06-01T12:00:00Z",
    "database": "connected",
    "environment": "development"
}))]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `connected` or `disconnected` based on a live ping
    pub database: String,
    pub environment: String,
}

/// Health check
///
/// Always responds 200; `database` reports `disconnected` while the startup
/// retry loop is still trying to reach MySQL.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    let database = if state.db.is_connected().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: "ok".to_owned(),
        timestamp: Utc::now(),
        database: database.to_owned(),
        environment: state.environment.clone(),
    })
}
