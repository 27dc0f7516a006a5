/// Service banner and health check endpoints
///
/// # Endpoints
///
/// ```text
/// GET /
/// GET /health
/// ```
///
/// The health check verifies the server is running and probes database
/// connectivity. It always answers 200; a broken database is reported in the
/// body rather than as an error status, so load balancers can tell "process
/// up, dependency down" apart from "process down".
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "1.0.0",
///   "database": "connected"
/// }
/// ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Service banner response
#[derive(Debug, Serialize, Deserialize)]
pub struct BannerResponse {
    /// Greeting line
    pub message: String,

    /// Service status
    pub status: String,

    /// Application version
    pub version: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,
}

/// Root banner handler
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "TaskFlow API is running!".to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check handler
///
/// Returns service health status including database connectivity.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let database_status = match taskflow_shared::db::pool::health_check(&state.db).await {
        Ok(()) => "connected",
        Err(_) => "disconnected",
    };

    Ok(Json(HealthResponse {
        status: if database_status == "connected" {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database_status.to_string(),
    }))
}
