//! REST handlers for the reports view.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use phishsim_reporting::overview::{
    CampaignResultRow, DepartmentAnalysisRow, FleetSummary, ReportsOverview, UserPerformanceRow,
};
use phishsim_reporting::{export, overview, Timeframe};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::rest::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportsQuery {
    #[serde(default)]
    pub timeframe: Timeframe,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    #[serde(flatten)]
    pub overview: ReportsOverview,
    pub fleet: FleetSummary,
}

/// GET /api/v1/reports/overview — headline cards plus the fleet summary
/// computed over the current campaign list.
pub async fn reports_overview(
    State(state): State<AppState>,
    Query(query): Query<ReportsQuery>,
) -> Json<OverviewResponse> {
    let campaigns = state.gateway.list_campaigns().await;
    Json(OverviewResponse {
        overview: overview::reports_overview(query.timeframe),
        fleet: overview::fleet_summary(&campaigns),
    })
}

/// GET /api/v1/reports/campaigns — per-campaign results table.
pub async fn campaign_results(
    State(state): State<AppState>,
) -> Json<Vec<CampaignResultRow>> {
    let campaigns = state.gateway.list_campaigns().await;
    Json(overview::campaign_results(&campaigns))
}

/// GET /api/v1/reports/departments — department analysis table.
pub async fn department_analysis() -> Json<Vec<DepartmentAnalysisRow>> {
    Json(overview::department_analysis())
}

/// GET /api/v1/reports/users — user performance table.
pub async fn user_performance() -> Json<Vec<UserPerformanceRow>> {
    Json(overview::user_performance())
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// GET /api/v1/reports/export?format=csv|json — download of the campaign
/// results table.
pub async fn export_report(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> axum::response::Response {
    let campaigns = state.gateway.list_campaigns().await;
    let rows = overview::campaign_results(&campaigns);
    metrics::counter!("reports.exports").increment(1);

    match query.format {
        ExportFormat::Csv => (
            [(header::CONTENT_TYPE, "text/csv")],
            export::campaign_results_csv(&rows),
        )
            .into_response(),
        ExportFormat::Json => match export::campaign_results_json(&rows) {
            Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
            Err(e) => {
                error!(error = %e, "Report export failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
    }
}
