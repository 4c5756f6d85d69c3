//! CSV/JSON export of the campaign results table.

use phishsim_core::error::PhishSimResult;

use crate::overview::CampaignResultRow;

/// Render rows as CSV with a header line. Names are quoted, with embedded
/// quotes doubled.
pub fn campaign_results_csv(rows: &[CampaignResultRow]) -> String {
    let mut csv =
        String::from("campaign,date,recipients,click_rate,submission_rate,report_rate\n");
    for row in rows {
        csv.push_str(&format!(
            "\"{}\",{},{},{},{},{}\n",
            row.name.replace('"', "\"\""),
            row.date,
            row.recipients,
            row.click_rate,
            row.submission_rate,
            row.report_rate,
        ));
    }
    csv
}

pub fn campaign_results_json(rows: &[CampaignResultRow]) -> PhishSimResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<CampaignResultRow> {
        vec![
            CampaignResultRow {
                name: "Password Reset Campaign".into(),
                date: "2023-03-15".into(),
                recipients: 145,
                click_rate: 24.3,
                submission_rate: 12.7,
                report_rate: 38.2,
            },
            CampaignResultRow {
                name: "The \"Urgent\" Invoice".into(),
                date: "2023-02-01".into(),
                recipients: 60,
                click_rate: 10.0,
                submission_rate: 5.0,
                report_rate: 20.0,
            },
        ]
    }

    #[test]
    fn test_csv_header_and_row_count() {
        let csv = campaign_results_csv(&rows());
        assert!(csv.starts_with("campaign,date,"));
        assert_eq!(csv.lines().count(), 3); // header + 2 rows
        assert!(csv.contains("\"Password Reset Campaign\",2023-03-15,145,24.3,12.7,38.2"));
    }

    #[test]
    fn test_csv_escapes_quotes() {
        let csv = campaign_results_csv(&rows());
        assert!(csv.contains("\"The \"\"Urgent\"\" Invoice\""));
    }

    #[test]
    fn test_json_round_trips() {
        let json = campaign_results_json(&rows()).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["recipients"], 145);
    }
}
