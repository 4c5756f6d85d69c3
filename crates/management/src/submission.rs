//! The campaign submission pipeline: validate the flat form fields, build
//! a draft, delegate to the store gateway, and map every outcome into the
//! uniform `{success, message, data}` envelope. One synchronous
//! validate-then-delegate pass per call; no retries.

use phishsim_core::error::PhishSimError;
use phishsim_core::types::{AudienceSelection, CampaignDraft, PhishingTemplate};
use phishsim_store::CampaignGateway;
use tracing::{error, warn};

use crate::models::{CampaignSubmission, SubmissionResponse};

pub const MISSING_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const STORE_FAILURE: &str = "Failed to create campaign";
pub const UNEXPECTED_FAILURE: &str = "An unexpected error occurred";

/// Handle a campaign creation submission.
pub async fn create_campaign(
    gateway: &CampaignGateway,
    submission: CampaignSubmission,
) -> SubmissionResponse {
    let draft = match validate(&submission) {
        Ok(draft) => draft,
        Err(message) => {
            warn!(message = %message, "Campaign submission rejected");
            metrics::counter!("submissions.validation_failures").increment(1);
            return SubmissionResponse::failure(message);
        }
    };

    match gateway.create_campaign(draft).await {
        Ok(campaign) => {
            metrics::counter!("submissions.campaigns_created").increment(1);
            SubmissionResponse::created(campaign)
        }
        Err(PhishSimError::Store(_)) => {
            // Cause already logged at the gateway; the caller gets a
            // generic message without internal detail.
            metrics::counter!("submissions.store_failures").increment(1);
            SubmissionResponse::failure(STORE_FAILURE)
        }
        Err(e) => {
            error!(error = %e, "Unexpected fault during campaign creation");
            metrics::counter!("submissions.unexpected_failures").increment(1);
            SubmissionResponse::failure(UNEXPECTED_FAILURE)
        }
    }
}

/// Enforce the mandatory field set and normalize the remaining fields into
/// a draft. Date strings are passed through unparsed; no range validation
/// is performed at this layer.
fn validate(submission: &CampaignSubmission) -> Result<CampaignDraft, String> {
    let required = [
        &submission.name,
        &submission.start_date,
        &submission.end_date,
        &submission.template,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(MISSING_REQUIRED_FIELDS.to_string());
    }

    let template: PhishingTemplate = submission
        .template
        .trim()
        .parse()
        .map_err(validation_message)?;

    let audience = if submission.audience.trim().is_empty() {
        AudienceSelection::default()
    } else {
        submission
            .audience
            .trim()
            .parse()
            .map_err(validation_message)?
    };

    let department = match submission.department.trim() {
        "" => None,
        value => Some(value.to_string()),
    };

    Ok(CampaignDraft {
        name: submission.name.trim().to_string(),
        description: submission.description.trim().to_string(),
        start_date: submission.start_date.trim().to_string(),
        end_date: submission.end_date.trim().to_string(),
        template,
        audience,
        department,
    })
}

fn validation_message(e: PhishSimError) -> String {
    match e {
        PhishSimError::Validation(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishsim_store::StoreConfig;

    fn gateway() -> CampaignGateway {
        CampaignGateway::new(StoreConfig::Unconfigured, 5000).unwrap()
    }

    fn valid_submission() -> CampaignSubmission {
        CampaignSubmission {
            name: "Q2 Test".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-08".into(),
            template: "password-reset".into(),
            ..CampaignSubmission::default()
        }
    }

    #[tokio::test]
    async fn test_valid_submission_creates_campaign() {
        let response = create_campaign(&gateway(), valid_submission()).await;
        assert!(response.success);

        let campaign = response.data.unwrap();
        assert!(!campaign.id.is_empty());
        assert_eq!(campaign.click_rate, 0.0);
        assert_eq!(campaign.submission_rate, 0.0);
        assert_eq!(campaign.report_rate, 0.0);
        assert!((50..150).contains(&campaign.recipients));
        assert_eq!(campaign.audience, AudienceSelection::All);
    }

    #[tokio::test]
    async fn test_each_required_field_is_enforced() {
        let clears: [fn(&mut CampaignSubmission); 4] = [
            |s| s.name.clear(),
            |s| s.start_date.clear(),
            |s| s.end_date.clear(),
            |s| s.template.clear(),
        ];
        for clear in clears {
            let mut submission = valid_submission();
            clear(&mut submission);
            let response = create_campaign(&gateway(), submission).await;
            assert!(!response.success);
            assert_eq!(response.message.as_deref(), Some(MISSING_REQUIRED_FIELDS));
            assert!(response.data.is_none());
        }
    }

    #[tokio::test]
    async fn test_description_only_submission_fails() {
        let submission = CampaignSubmission {
            description: "x".into(),
            ..CampaignSubmission::default()
        };
        let response = create_campaign(&gateway(), submission).await;
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some(MISSING_REQUIRED_FIELDS));
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn test_whitespace_fields_count_as_missing() {
        let mut submission = valid_submission();
        submission.name = "   ".into();
        let response = create_campaign(&gateway(), submission).await;
        assert!(!response.success);
    }

    #[tokio::test]
    async fn test_unknown_template_is_rejected() {
        let mut submission = valid_submission();
        submission.template = "gift-card".into();
        let response = create_campaign(&gateway(), submission).await;
        assert!(!response.success);
        assert!(response.message.unwrap().contains("gift-card"));
    }

    #[tokio::test]
    async fn test_unknown_audience_is_rejected() {
        let mut submission = valid_submission();
        submission.audience = "everyone".into();
        let response = create_campaign(&gateway(), submission).await;
        assert!(!response.success);
    }

    #[tokio::test]
    async fn test_department_audience_passes_through() {
        let mut submission = valid_submission();
        submission.audience = "department".into();
        submission.department = "it".into();
        let response = create_campaign(&gateway(), submission).await;
        assert!(response.success);

        let campaign = response.data.unwrap();
        assert_eq!(campaign.audience, AudienceSelection::Department);
        assert_eq!(campaign.department.as_deref(), Some("it"));
    }

    #[tokio::test]
    async fn test_ids_unique_across_submissions() {
        let gateway = gateway();
        let first = create_campaign(&gateway, valid_submission()).await;
        let second = create_campaign(&gateway, valid_submission()).await;
        assert_ne!(first.data.unwrap().id, second.data.unwrap().id);
    }
}
