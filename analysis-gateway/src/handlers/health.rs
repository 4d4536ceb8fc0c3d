use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "analysis-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Ready only while the analysis service answers its own health check.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.analysis_client.probe().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
