use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse};
use crate::transport::http::ApiError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (DB reachable)", body = HealthResponse),
        (status = 503, description = "Service is unhealthy (DB unreachable)", body = ErrorResponse)
    )
)]
pub async fn healthcheck_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    state.database.ping().await.map_err(|e| {
        ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            format!("DB ping failed: {}", e),
        )
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
