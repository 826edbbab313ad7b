//! Health endpoint

use axum::extract::State;
use axum::response::Json;

use crate::presentation::controllers::AppState;
use crate::presentation::models::HealthResponse;

/// GET /health - Service liveness and uptime
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime_seconds: state.startup_time.elapsed().as_secs(),
    })
}
