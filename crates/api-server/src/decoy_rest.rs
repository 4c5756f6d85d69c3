//! The decoy landing and feedback pages.
//!
//! A decoy page never 404s: an unknown campaign id still gets a generic
//! landing page, so following a stale simulation link doesn't reveal the
//! exercise prematurely.

use axum::extract::{Path, State};
use axum::response::Html;
use phishsim_core::types::PhishingTemplate;
use phishsim_education::decoy;

use crate::rest::AppState;

/// GET /landing/:id — the credential-harvest decoy a simulated phishing
/// link points at.
pub async fn landing(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let template = state
        .gateway
        .get_campaign(&id)
        .await
        .map(|campaign| campaign.template)
        .unwrap_or(PhishingTemplate::PasswordReset);
    metrics::counter!("decoy.landing_views").increment(1);
    Html(decoy::landing_page(&id, template).html)
}

/// GET /landing/:id/feedback — the reveal shown after the recipient
/// follows the decoy form through.
pub async fn feedback(Path(id): Path<String>) -> Html<String> {
    metrics::counter!("decoy.feedback_views").increment(1);
    Html(decoy::feedback_page(&id).html)
}
