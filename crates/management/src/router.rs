//! Dashboard API router — mounts the campaign endpoints under /api/v1.

use axum::routing::{get, post};
use axum::Router;
use phishsim_store::CampaignGateway;
use std::sync::Arc;

use crate::handlers::{self, DashboardState};

/// Build the dashboard router around an injected gateway.
/// Returns a Router that should be merged into the main app.
pub fn dashboard_router(gateway: Arc<CampaignGateway>) -> Router {
    let state = DashboardState { gateway };

    Router::new()
        // Campaigns
        .route("/api/v1/campaigns", get(handlers::list_campaigns).post(handlers::create_campaign))
        .route("/api/v1/campaigns/:id", get(handlers::get_campaign))
        .route("/api/v1/campaigns/:id/results", get(handlers::campaign_results))
        .route("/api/v1/campaigns/:id/recipients", get(handlers::campaign_recipients))
        .route("/api/v1/campaigns/:id/template", get(handlers::campaign_template))
        // Interactions
        .route("/api/v1/interactions", post(handlers::record_interaction))
        // Reference data / status
        .route("/api/v1/recipients", get(handlers::list_recipients))
        .route("/api/v1/store/status", get(handlers::store_status))
        .with_state(state)
}
