//! Fixed sample data served when no external store is configured.

use chrono::{DateTime, TimeZone, Utc};
use phishsim_core::types::{AudienceSelection, Campaign, PhishingTemplate, Recipient};

fn campaign_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// The three sample campaigns, ordered newest `created_at` first. Callers
/// rely on this order being stable.
pub fn sample_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "campaign-1".into(),
            name: "Password Reset Campaign".into(),
            description: "Simulated password reset request".into(),
            start_date: "2023-03-15".into(),
            end_date: "2023-03-22".into(),
            template: PhishingTemplate::PasswordReset,
            audience: AudienceSelection::Department,
            department: Some("marketing".into()),
            recipients: 145,
            click_rate: 24.3,
            submission_rate: 12.7,
            report_rate: 38.2,
            created_at: campaign_date(2023, 3, 15),
        },
        Campaign {
            id: "campaign-2".into(),
            name: "Document Share Simulation".into(),
            description: "Simulated document sharing notification".into(),
            start_date: "2023-02-22".into(),
            end_date: "2023-03-01".into(),
            template: PhishingTemplate::DocumentShare,
            audience: AudienceSelection::Department,
            department: Some("finance".into()),
            recipients: 132,
            click_rate: 31.2,
            submission_rate: 18.5,
            report_rate: 29.7,
            created_at: campaign_date(2023, 2, 22),
        },
        Campaign {
            id: "campaign-3".into(),
            name: "Package Delivery Notice".into(),
            description: "Simulated package delivery notification".into(),
            start_date: "2023-01-10".into(),
            end_date: "2023-01-17".into(),
            template: PhishingTemplate::PackageDelivery,
            audience: AudienceSelection::Department,
            department: Some("sales".into()),
            recipients: 156,
            click_rate: 35.8,
            submission_rate: 22.1,
            report_rate: 25.3,
            created_at: campaign_date(2023, 1, 10),
        },
    ]
}

/// Sample employees used for recipient views and interaction simulation.
pub fn sample_recipients() -> Vec<Recipient> {
    vec![
        Recipient {
            id: "user-1".into(),
            email: "john.smith@example.com".into(),
            department: "IT".into(),
        },
        Recipient {
            id: "user-2".into(),
            email: "sarah.johnson@example.com".into(),
            department: "Marketing".into(),
        },
        Recipient {
            id: "user-3".into(),
            email: "michael.chen@example.com".into(),
            department: "Finance".into(),
        },
        Recipient {
            id: "user-4".into(),
            email: "emily.davis@example.com".into(),
            department: "Sales".into(),
        },
        Recipient {
            id: "user-5".into(),
            email: "robert.wilson@example.com".into(),
            department: "HR".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_ordered_newest_first() {
        let campaigns = sample_campaigns();
        assert_eq!(campaigns.len(), 3);
        for pair in campaigns.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
    }

    #[test]
    fn test_sample_ids_stable() {
        let ids: Vec<String> = sample_campaigns().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["campaign-1", "campaign-2", "campaign-3"]);
    }

    #[test]
    fn test_five_sample_recipients() {
        assert_eq!(sample_recipients().len(), 5);
    }
}
