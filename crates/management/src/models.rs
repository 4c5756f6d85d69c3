//! Request/response shapes for the dashboard API.

use phishsim_core::types::{Campaign, InteractionKind};
use serde::{Deserialize, Serialize};

/// Flat field map submitted by the campaign creation form. Keys follow the
/// form's camelCase field names; every field arrives as a string and
/// absent fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignSubmission {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub template: String,
    pub audience: String,
    pub department: String,
}

/// Uniform submission outcome envelope. The handler always answers with
/// this shape; HTTP status stays 200 and `success` carries the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Campaign>,
}

impl SubmissionResponse {
    pub fn created(campaign: Campaign) -> Self {
        Self {
            success: true,
            message: Some("Campaign created successfully".to_string()),
            data: Some(campaign),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordInteractionRequest {
    pub campaign_id: String,
    pub email: String,
    pub kind: InteractionKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionAck {
    pub success: bool,
}

/// Store mode surfaced to the dashboard so it can warn when the app runs
/// on sample data.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub configured: bool,
    pub mode: &'static str,
}

/// Email preview for a campaign's template tab.
#[derive(Debug, Clone, Serialize)]
pub struct TemplatePreview {
    pub template: String,
    pub display_name: String,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub educational_note: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
