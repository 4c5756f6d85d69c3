//! Axum REST handlers for the dashboard API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use phishsim_core::templates::TemplateCatalog;
use phishsim_core::types::{Campaign, Recipient};
use phishsim_simulation::{results_summary, InteractionSimulator, ResultsSummary, SimulatedInteraction};
use phishsim_store::CampaignGateway;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::*;
use crate::submission;

/// Shared dashboard state: the gateway constructed at startup.
#[derive(Clone)]
pub struct DashboardState {
    pub gateway: Arc<CampaignGateway>,
}

type NotFound = (StatusCode, Json<ErrorResponse>);

fn campaign_not_found(id: &str) -> NotFound {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "campaign_not_found".to_string(),
            message: format!("No campaign with id '{id}'"),
        }),
    )
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

pub async fn list_campaigns(State(state): State<DashboardState>) -> Json<Vec<Campaign>> {
    Json(state.gateway.list_campaigns().await)
}

pub async fn get_campaign(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<Campaign>, NotFound> {
    state
        .gateway
        .get_campaign(&id)
        .await
        .map(Json)
        .ok_or_else(|| campaign_not_found(&id))
}

pub async fn create_campaign(
    State(state): State<DashboardState>,
    Json(req): Json<CampaignSubmission>,
) -> Json<SubmissionResponse> {
    Json(submission::create_campaign(&state.gateway, req).await)
}

// ─── Campaign detail tabs ──────────────────────────────────────────────────

pub async fn campaign_results(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<ResultsSummary>, NotFound> {
    let campaign = state
        .gateway
        .get_campaign(&id)
        .await
        .ok_or_else(|| campaign_not_found(&id))?;
    Ok(Json(results_summary(&campaign)))
}

/// Per-recipient rows for the detail view. These are simulated from the
/// campaign's aggregate rates on every request; there is no interaction
/// log behind them.
pub async fn campaign_recipients(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SimulatedInteraction>>, NotFound> {
    let campaign = state
        .gateway
        .get_campaign(&id)
        .await
        .ok_or_else(|| campaign_not_found(&id))?;
    let recipients = state.gateway.recipients();
    let rows = InteractionSimulator::new().simulate(&campaign, &recipients);
    Ok(Json(rows))
}

pub async fn campaign_template(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<TemplatePreview>, NotFound> {
    let campaign = state
        .gateway
        .get_campaign(&id)
        .await
        .ok_or_else(|| campaign_not_found(&id))?;
    let entry = TemplateCatalog::get(campaign.template);
    let rendered = TemplateCatalog::render(campaign.template, &HashMap::new());
    Ok(Json(TemplatePreview {
        template: campaign.template.as_str().to_string(),
        display_name: campaign.template.display_name().to_string(),
        sender: rendered.sender,
        subject: rendered.subject,
        body: rendered.body,
        educational_note: entry.educational_note.to_string(),
    }))
}

// ─── Interactions / recipients / status ────────────────────────────────────

pub async fn record_interaction(
    State(state): State<DashboardState>,
    Json(req): Json<RecordInteractionRequest>,
) -> Json<InteractionAck> {
    let success = state
        .gateway
        .record_interaction(&req.campaign_id, &req.email, req.kind)
        .await;
    Json(InteractionAck { success })
}

pub async fn list_recipients(State(state): State<DashboardState>) -> Json<Vec<Recipient>> {
    Json(state.gateway.recipients())
}

pub async fn store_status(State(state): State<DashboardState>) -> Json<StoreStatus> {
    Json(StoreStatus {
        configured: !state.gateway.is_fallback(),
        mode: state.gateway.mode_label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishsim_core::types::InteractionKind;
    use phishsim_store::StoreConfig;

    fn state() -> DashboardState {
        DashboardState {
            gateway: Arc::new(CampaignGateway::new(StoreConfig::Unconfigured, 5000).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_list_campaigns_serves_samples() {
        let Json(campaigns) = list_campaigns(State(state())).await;
        assert_eq!(campaigns.len(), 3);
        assert_eq!(campaigns[0].id, "campaign-1");
    }

    #[tokio::test]
    async fn test_get_campaign_not_found() {
        let result = get_campaign(State(state()), Path("campaign-9".into())).await;
        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "campaign_not_found");
    }

    #[tokio::test]
    async fn test_campaign_results_derived_from_rates() {
        let result = campaign_results(State(state()), Path("campaign-1".into())).await;
        let Json(summary) = result.ok().unwrap();
        assert_eq!(summary.emails_sent, 145);
        assert_eq!(summary.clicked, 35);
    }

    #[tokio::test]
    async fn test_campaign_recipients_cover_sample_users() {
        let result = campaign_recipients(State(state()), Path("campaign-1".into())).await;
        let Json(rows) = result.ok().unwrap();
        assert_eq!(rows.len(), 5);
        for row in &rows {
            if row.submitted {
                assert!(row.clicked);
            }
        }
    }

    #[tokio::test]
    async fn test_campaign_template_preview() {
        let result = campaign_template(State(state()), Path("campaign-1".into())).await;
        let Json(preview) = result.ok().unwrap();
        assert_eq!(preview.template, "password-reset");
        assert_eq!(preview.subject, "Urgent: Password Reset Required");
        assert!(!preview.educational_note.is_empty());
    }

    #[tokio::test]
    async fn test_record_interaction_acknowledges() {
        let Json(ack) = record_interaction(
            State(state()),
            Json(RecordInteractionRequest {
                campaign_id: "campaign-1".into(),
                email: "john.smith@example.com".into(),
                kind: InteractionKind::Reported,
            }),
        )
        .await;
        assert!(ack.success);
    }

    #[tokio::test]
    async fn test_store_status_reports_sample_data() {
        let Json(status) = store_status(State(state())).await;
        assert!(!status.configured);
        assert_eq!(status.mode, "sample-data");
    }
}
