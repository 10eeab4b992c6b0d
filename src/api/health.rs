use crate::api::MgmtState;
use crate::api::schemas::health::{PingResponse, ReadyzResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Health check: confirms the service is up and responding.
pub async fn ping() -> impl IntoResponse {
    Json(PingResponse { status: "success".to_string(), message: "pong!".to_string() })
}

/// Liveness probe: returns 200 OK as long as the server is running.
pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe: checks connectivity to the database.
pub async fn readyz(State(state): State<MgmtState>) -> impl IntoResponse {
    match state.health_service.check_db().await {
        Ok(()) => {
            let response = ReadyzResponse { status: "ok".to_string(), database: "ok".to_string() };
            (StatusCode::OK, Json(response))
        }
        Err(e) => {
            tracing::warn!(error = %e, component = "database", "Readiness probe failed");
            let response = ReadyzResponse { status: "error".to_string(), database: "error".to_string() };
            (StatusCode::SERVICE_UNAVAILABLE, Json(response))
        }
    }
}
