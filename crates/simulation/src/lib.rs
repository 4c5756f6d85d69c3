//! Demo-mode interaction simulation.
//!
//! No per-recipient interaction log exists in the current scope, so the
//! recipient views derive plausible rows from a campaign's aggregate rates
//! at display time. This is presentation mock data by design and must never
//! feed back into the store: the generator lives here, outside the core
//! data path, and is recomputed on every render.

use phishsim_core::types::{Campaign, Recipient};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// One recipient's simulated response to a campaign.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedInteraction {
    #[serde(flatten)]
    pub recipient: Recipient,
    pub clicked: bool,
    pub submitted: bool,
    pub reported: bool,
}

/// Aggregate results derived from a campaign's stored rates. The opened
/// share is a fixed 85% display assumption, not a tracked metric.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsSummary {
    pub emails_sent: u32,
    pub opened: u32,
    pub open_rate: f64,
    pub clicked: u32,
    pub click_rate: f64,
    pub submitted: u32,
    pub submission_rate: f64,
    pub reported: u32,
    pub report_rate: f64,
}

const ASSUMED_OPEN_RATE: f64 = 85.0;

pub struct InteractionSimulator {
    rng: StdRng,
}

impl InteractionSimulator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a simulated response per recipient. A click happens with the
    /// campaign's click rate; a submission only follows a click, with the
    /// conditional probability `submission_rate / click_rate`; reporting is
    /// drawn independently.
    pub fn simulate(
        &mut self,
        campaign: &Campaign,
        recipients: &[Recipient],
    ) -> Vec<SimulatedInteraction> {
        recipients
            .iter()
            .map(|recipient| {
                let clicked = self.rng.gen::<f64>() < campaign.click_rate / 100.0;
                let submitted = clicked
                    && campaign.click_rate > 0.0
                    && self.rng.gen::<f64>() < campaign.submission_rate / campaign.click_rate;
                let reported = self.rng.gen::<f64>() < campaign.report_rate / 100.0;
                SimulatedInteraction {
                    recipient: recipient.clone(),
                    clicked,
                    submitted,
                    reported,
                }
            })
            .collect()
    }
}

impl Default for InteractionSimulator {
    fn default() -> Self {
        Self::new()
    }
}

fn share_of(recipients: u32, rate: f64) -> u32 {
    (f64::from(recipients) * rate / 100.0).round() as u32
}

/// Derive the results-summary card figures from a campaign's stored rates.
pub fn results_summary(campaign: &Campaign) -> ResultsSummary {
    ResultsSummary {
        emails_sent: campaign.recipients,
        opened: share_of(campaign.recipients, ASSUMED_OPEN_RATE),
        open_rate: ASSUMED_OPEN_RATE,
        clicked: share_of(campaign.recipients, campaign.click_rate),
        click_rate: campaign.click_rate,
        submitted: share_of(campaign.recipients, campaign.submission_rate),
        submission_rate: campaign.submission_rate,
        reported: share_of(campaign.recipients, campaign.report_rate),
        report_rate: campaign.report_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishsim_core::types::{AudienceSelection, PhishingTemplate};

    fn campaign(click: f64, submission: f64, report: f64) -> Campaign {
        Campaign {
            id: "campaign-1".into(),
            name: "Password Reset Campaign".into(),
            description: String::new(),
            start_date: "2023-03-15".into(),
            end_date: "2023-03-22".into(),
            template: PhishingTemplate::PasswordReset,
            audience: AudienceSelection::All,
            department: None,
            recipients: 145,
            click_rate: click,
            submission_rate: submission,
            report_rate: report,
            created_at: chrono::Utc::now(),
        }
    }

    fn recipients() -> Vec<Recipient> {
        (1..=5)
            .map(|i| Recipient {
                id: format!("user-{i}"),
                email: format!("user{i}@example.com"),
                department: "IT".into(),
            })
            .collect()
    }

    #[test]
    fn test_seeded_simulation_is_deterministic() {
        let campaign = campaign(24.3, 12.7, 38.2);
        let recipients = recipients();
        let first = InteractionSimulator::with_seed(42).simulate(&campaign, &recipients);
        let second = InteractionSimulator::with_seed(42).simulate(&campaign, &recipients);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.clicked, b.clicked);
            assert_eq!(a.submitted, b.submitted);
            assert_eq!(a.reported, b.reported);
        }
    }

    #[test]
    fn test_submission_requires_click() {
        let campaign = campaign(50.0, 25.0, 30.0);
        let recipients = recipients();
        for seed in 0..20 {
            let rows = InteractionSimulator::with_seed(seed).simulate(&campaign, &recipients);
            for row in rows {
                if row.submitted {
                    assert!(row.clicked);
                }
            }
        }
    }

    #[test]
    fn test_zero_rates_produce_no_interactions() {
        let campaign = campaign(0.0, 0.0, 0.0);
        let rows = InteractionSimulator::with_seed(7).simulate(&campaign, &recipients());
        for row in rows {
            assert!(!row.clicked && !row.submitted && !row.reported);
        }
    }

    #[test]
    fn test_full_rates_hit_everyone() {
        let campaign = campaign(100.0, 100.0, 100.0);
        let rows = InteractionSimulator::with_seed(7).simulate(&campaign, &recipients());
        for row in rows {
            assert!(row.clicked && row.submitted && row.reported);
        }
    }

    #[test]
    fn test_results_summary_counts() {
        let summary = results_summary(&campaign(24.3, 12.7, 38.2));
        assert_eq!(summary.emails_sent, 145);
        assert_eq!(summary.opened, 123); // 145 * 0.85, rounded
        assert_eq!(summary.clicked, 35); // 145 * 0.243, rounded
        assert_eq!(summary.submitted, 18);
        assert_eq!(summary.reported, 55);
    }
}
