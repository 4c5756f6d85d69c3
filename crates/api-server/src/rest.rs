//! Operational REST handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use phishsim_store::CampaignGateway;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CampaignGateway>,
    pub instance_id: String,
    pub start_time: Instant,
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        instance_id: state.instance_id.clone(),
        store_mode: state.gateway.mode_label().to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe for Kubernetes.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.start_time.elapsed().as_secs() > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live — Liveness probe for Kubernetes.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub instance_id: String,
    pub store_mode: String,
    pub uptime_secs: u64,
}
