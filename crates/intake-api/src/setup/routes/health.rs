//! Health check handlers.

use crate::state::DbState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::time::Duration;

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - critical dependencies (database).
pub async fn readiness_check(State(db): State<DbState>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let mut response = serde_json::json!({
        "status": "ready",
        "database": "unknown"
    });

    let mut overall_ready = true;
    match &db.pool {
        Some(pool) => {
            match tokio::time::timeout(TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await {
                Ok(Ok(_)) => response["database"] = serde_json::json!("ready"),
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "Database readiness check failed");
                    response["database"] = serde_json::json!(format!("not_ready: {}", e));
                    overall_ready = false;
                }
                Err(_) => {
                    tracing::error!("Database readiness check timed out");
                    response["database"] = serde_json::json!("timeout");
                    overall_ready = false;
                }
            }
        }
        // No pool configured (in-memory store); the service itself is serving.
        None => response["database"] = serde_json::json!("not_configured"),
    }

    if !overall_ready {
        response["status"] = serde_json::json!("not_ready");
    }

    let status_code = if overall_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
