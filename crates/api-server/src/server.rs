//! API server — assembles the dashboard, reports, education, and decoy
//! routes into one HTTP app.

use crate::rest::{self, AppState};
use crate::{decoy_rest, education_rest, reports_rest};
use axum::routing::get;
use axum::Router;
use phishsim_core::config::AppConfig;
use phishsim_management::dashboard_router;
use phishsim_store::CampaignGateway;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct ApiServer {
    config: AppConfig,
    gateway: Arc<CampaignGateway>,
}

impl ApiServer {
    pub fn new(config: AppConfig, gateway: Arc<CampaignGateway>) -> Self {
        Self { config, gateway }
    }

    /// Build the full application router. Split out of `start_http` so
    /// tests can drive the app without binding a socket.
    pub fn router(&self) -> Router {
        let state = AppState {
            gateway: self.gateway.clone(),
            instance_id: self.config.instance_id.clone(),
            start_time: Instant::now(),
        };

        Router::new()
            // Reports
            .route("/api/v1/reports/overview", get(reports_rest::reports_overview))
            .route("/api/v1/reports/campaigns", get(reports_rest::campaign_results))
            .route("/api/v1/reports/departments", get(reports_rest::department_analysis))
            .route("/api/v1/reports/users", get(reports_rest::user_performance))
            .route("/api/v1/reports/export", get(reports_rest::export_report))
            // Education
            .route("/api/v1/education/courses", get(education_rest::courses))
            .route("/api/v1/education/resources", get(education_rest::resources))
            .route("/api/v1/education/quizzes", get(education_rest::quizzes))
            // Decoy pages
            .route("/landing/:id", get(decoy_rest::landing))
            .route("/landing/:id/feedback", get(decoy_rest::feedback))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            .with_state(state)
            // Campaign dashboard endpoints carry their own state
            .merge(dashboard_router(self.gateway.clone()))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the HTTP server (blocks until shutdown).
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = self.router();

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the Prometheus metrics exporter on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
