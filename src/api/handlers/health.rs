//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with dependency checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The profile API answers
/// - **503 Service Unavailable**: The profile API is unreachable or failing
///
/// # Components Checked
///
/// 1. **API**: Fetches the kink catalog anonymously; a 401 still counts as reachable
/// 2. **Sessions**: Reports the number of live editor sessions
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "api": { "status": "ok", "message": "Reachable, 42 kinks in catalog" },
///     "sessions": { "status": "ok", "message": "Active: 3" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let api_check = check_api(&state).await;
    let sessions_check = check_sessions(&state).await;

    let all_healthy = api_check.is_ok() && sessions_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            api: api_check,
            sessions: sessions_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the profile API answers.
async fn check_api(state: &AppState) -> CheckStatus {
    match state.site_service.check_api().await {
        Ok(count) => CheckStatus::ok(format!("Reachable, {count} kinks in catalog")),
        Err(e) => CheckStatus::error(format!("API error: {e}")),
    }
}

async fn check_sessions(state: &AppState) -> CheckStatus {
    let count = state.editor_service.session_count().await;
    CheckStatus::ok(format!("Active: {count}"))
}
