use chrono::{DateTime, Utc};
use phishsim_core::types::Campaign;
use serde::{Deserialize, Serialize};

/// Reporting window selected in the dashboard. Currently cosmetic: the
/// underlying datasets do not vary by window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[serde(rename = "7days")]
    SevenDays,
    #[default]
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "90days")]
    NinetyDays,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "all")]
    All,
}

/// A headline rate with its change against the previous period. A negative
/// change on click/submission rates is an improvement; the dashboard does
/// the coloring.
#[derive(Debug, Clone, Serialize)]
pub struct RateSummary {
    pub value: f64,
    pub change_from_previous: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportsOverview {
    pub timeframe: Timeframe,
    pub click_rate: RateSummary,
    pub submission_rate: RateSummary,
    pub report_rate: RateSummary,
    pub generated_at: DateTime<Utc>,
}

/// Headline cards for the reports view.
pub fn reports_overview(timeframe: Timeframe) -> ReportsOverview {
    ReportsOverview {
        timeframe,
        click_rate: RateSummary {
            value: 24.3,
            change_from_previous: -2.1,
        },
        submission_rate: RateSummary {
            value: 12.7,
            change_from_previous: -1.5,
        },
        report_rate: RateSummary {
            value: 38.2,
            change_from_previous: 5.4,
        },
        generated_at: Utc::now(),
    }
}

// ─── Campaign results (derived from gateway data) ───────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CampaignResultRow {
    pub name: String,
    pub date: String,
    pub recipients: u32,
    pub click_rate: f64,
    pub submission_rate: f64,
    pub report_rate: f64,
}

pub fn campaign_results(campaigns: &[Campaign]) -> Vec<CampaignResultRow> {
    campaigns
        .iter()
        .map(|c| CampaignResultRow {
            name: c.name.clone(),
            date: c.start_date.clone(),
            recipients: c.recipients,
            click_rate: c.click_rate,
            submission_rate: c.submission_rate,
            report_rate: c.report_rate,
        })
        .collect()
}

/// Averages across the campaign list, kept separate from the static
/// previous-period deltas above.
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    pub total_campaigns: usize,
    pub total_recipients: u32,
    pub avg_click_rate: f64,
    pub avg_submission_rate: f64,
    pub avg_report_rate: f64,
}

pub fn fleet_summary(campaigns: &[Campaign]) -> FleetSummary {
    let count = campaigns.len();
    let avg = |f: fn(&Campaign) -> f64| {
        if count == 0 {
            0.0
        } else {
            campaigns.iter().map(f).sum::<f64>() / count as f64
        }
    };
    FleetSummary {
        total_campaigns: count,
        total_recipients: campaigns.iter().map(|c| c.recipients).sum(),
        avg_click_rate: avg(|c| c.click_rate),
        avg_submission_rate: avg(|c| c.submission_rate),
        avg_report_rate: avg(|c| c.report_rate),
    }
}

// ─── Department analysis ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentAnalysisRow {
    pub department: &'static str,
    pub employees: u32,
    pub click_rate: f64,
    pub submission_rate: f64,
    pub report_rate: f64,
}

pub fn department_analysis() -> Vec<DepartmentAnalysisRow> {
    vec![
        DepartmentAnalysisRow {
            department: "IT",
            employees: 28,
            click_rate: 14.3,
            submission_rate: 7.1,
            report_rate: 64.3,
        },
        DepartmentAnalysisRow {
            department: "Finance",
            employees: 32,
            click_rate: 21.9,
            submission_rate: 12.5,
            report_rate: 40.6,
        },
        DepartmentAnalysisRow {
            department: "Marketing",
            employees: 24,
            click_rate: 33.3,
            submission_rate: 16.7,
            report_rate: 29.2,
        },
        DepartmentAnalysisRow {
            department: "Sales",
            employees: 36,
            click_rate: 30.6,
            submission_rate: 19.4,
            report_rate: 25.0,
        },
        DepartmentAnalysisRow {
            department: "Human Resources",
            employees: 18,
            click_rate: 22.2,
            submission_rate: 11.1,
            report_rate: 44.4,
        },
    ]
}

// ─── User performance ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct UserPerformanceRow {
    pub employee: &'static str,
    pub department: &'static str,
    pub campaigns: u32,
    pub clicked: u32,
    pub submitted: u32,
    pub reported: u32,
}

pub fn user_performance() -> Vec<UserPerformanceRow> {
    vec![
        UserPerformanceRow {
            employee: "John Smith",
            department: "IT",
            campaigns: 3,
            clicked: 0,
            submitted: 0,
            reported: 3,
        },
        UserPerformanceRow {
            employee: "Sarah Johnson",
            department: "Marketing",
            campaigns: 3,
            clicked: 2,
            submitted: 1,
            reported: 0,
        },
        UserPerformanceRow {
            employee: "Michael Chen",
            department: "Finance",
            campaigns: 3,
            clicked: 1,
            submitted: 0,
            reported: 2,
        },
        UserPerformanceRow {
            employee: "Emily Davis",
            department: "Sales",
            campaigns: 3,
            clicked: 2,
            submitted: 1,
            reported: 1,
        },
        UserPerformanceRow {
            employee: "Robert Wilson",
            department: "HR",
            campaigns: 3,
            clicked: 0,
            submitted: 0,
            reported: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishsim_core::types::{AudienceSelection, PhishingTemplate};

    fn campaign(name: &str, recipients: u32, click: f64) -> Campaign {
        Campaign {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.into(),
            description: String::new(),
            start_date: "2023-03-15".into(),
            end_date: "2023-03-22".into(),
            template: PhishingTemplate::PasswordReset,
            audience: AudienceSelection::All,
            department: None,
            recipients,
            click_rate: click,
            submission_rate: 10.0,
            report_rate: 30.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_overview_cards() {
        let overview = reports_overview(Timeframe::default());
        assert_eq!(overview.timeframe, Timeframe::ThirtyDays);
        assert_eq!(overview.click_rate.value, 24.3);
        assert_eq!(overview.submission_rate.change_from_previous, -1.5);
        assert_eq!(overview.report_rate.change_from_previous, 5.4);
    }

    #[test]
    fn test_timeframe_slugs() {
        let parsed: Timeframe = serde_json::from_str("\"90days\"").unwrap();
        assert_eq!(parsed, Timeframe::NinetyDays);
        assert_eq!(serde_json::to_string(&Timeframe::All).unwrap(), "\"all\"");
    }

    #[test]
    fn test_campaign_results_mirror_campaigns() {
        let campaigns = vec![campaign("Password Reset Campaign", 145, 24.3)];
        let rows = campaign_results(&campaigns);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Password Reset Campaign");
        assert_eq!(rows[0].recipients, 145);
        assert_eq!(rows[0].click_rate, 24.3);
    }

    #[test]
    fn test_fleet_summary_averages() {
        let campaigns = vec![
            campaign("A", 100, 20.0),
            campaign("B", 50, 40.0),
        ];
        let summary = fleet_summary(&campaigns);
        assert_eq!(summary.total_campaigns, 2);
        assert_eq!(summary.total_recipients, 150);
        assert_eq!(summary.avg_click_rate, 30.0);
    }

    #[test]
    fn test_fleet_summary_empty() {
        let summary = fleet_summary(&[]);
        assert_eq!(summary.total_campaigns, 0);
        assert_eq!(summary.avg_click_rate, 0.0);
    }

    #[test]
    fn test_static_tables() {
        assert_eq!(department_analysis().len(), 5);
        assert_eq!(user_performance().len(), 5);
        let it = &department_analysis()[0];
        assert_eq!(it.department, "IT");
        assert_eq!(it.report_rate, 64.3);
    }
}
