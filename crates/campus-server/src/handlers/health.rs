//! Health check endpoint.

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, ServiceStatus};
use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint.
///
/// Reports the server version and database reachability. Always returns
/// 200; a failed liveness ping is reflected in the body as "degraded".
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server health status", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let database = match state.student_repo.health_check().await {
        Ok(()) => ServiceStatus {
            healthy: true,
            message: None,
        },
        Err(e) => ServiceStatus {
            healthy: false,
            message: Some(e.to_string()),
        },
    };

    Ok(Json(HealthResponse {
        status: if database.healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    }))
}
