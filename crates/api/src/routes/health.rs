//! Liveness report for the service and the systems it depends on.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when every dependency answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub authquest_reachable: bool,
}

/// GET /health
///
/// Always 200; callers read `status`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = peoplemover_db::health_check(&state.pool).await.is_ok();
    let authquest_reachable = state.authquest.is_reachable().await;

    Json(HealthResponse {
        status: if db_healthy && authquest_reachable {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        authquest_reachable,
    })
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
