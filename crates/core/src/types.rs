use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PhishSimError;

/// A phishing simulation campaign as stored in the `campaigns` table.
///
/// Dates are kept as the ISO `YYYY-MM-DD` strings the dashboard submits;
/// only `created_at` is a real timestamp. Rate fields are percentages in
/// 0–100, tracked independently and never cross-validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub template: PhishingTemplate,
    #[serde(default)]
    pub audience: AudienceSelection,
    #[serde(default)]
    pub department: Option<String>,
    pub recipients: u32,
    pub click_rate: f64,
    pub submission_rate: f64,
    pub report_rate: f64,
    pub created_at: DateTime<Utc>,
}

/// A campaign as submitted for creation, before the store assigns the
/// system-owned fields (id, recipient count, rates, created_at).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub template: PhishingTemplate,
    #[serde(default)]
    pub audience: AudienceSelection,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PhishingTemplate {
    PasswordReset,
    DocumentShare,
    PackageDelivery,
    Invoice,
    AccountVerification,
}

impl PhishingTemplate {
    pub const ALL: [PhishingTemplate; 5] = [
        PhishingTemplate::PasswordReset,
        PhishingTemplate::DocumentShare,
        PhishingTemplate::PackageDelivery,
        PhishingTemplate::Invoice,
        PhishingTemplate::AccountVerification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhishingTemplate::PasswordReset => "password-reset",
            PhishingTemplate::DocumentShare => "document-share",
            PhishingTemplate::PackageDelivery => "package-delivery",
            PhishingTemplate::Invoice => "invoice",
            PhishingTemplate::AccountVerification => "account-verification",
        }
    }

    /// Human-readable name, e.g. "Password Reset" for `password-reset`.
    pub fn display_name(&self) -> &'static str {
        match self {
            PhishingTemplate::PasswordReset => "Password Reset",
            PhishingTemplate::DocumentShare => "Document Share",
            PhishingTemplate::PackageDelivery => "Package Delivery",
            PhishingTemplate::Invoice => "Invoice Payment",
            PhishingTemplate::AccountVerification => "Account Verification",
        }
    }
}

impl std::str::FromStr for PhishingTemplate {
    type Err = PhishSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password-reset" => Ok(PhishingTemplate::PasswordReset),
            "document-share" => Ok(PhishingTemplate::DocumentShare),
            "package-delivery" => Ok(PhishingTemplate::PackageDelivery),
            "invoice" => Ok(PhishingTemplate::Invoice),
            "account-verification" => Ok(PhishingTemplate::AccountVerification),
            other => Err(PhishSimError::Validation(format!(
                "unknown template '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for PhishingTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the target audience of a campaign is selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudienceSelection {
    #[default]
    All,
    Department,
    Role,
    Custom,
}

impl AudienceSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceSelection::All => "all",
            AudienceSelection::Department => "department",
            AudienceSelection::Role => "role",
            AudienceSelection::Custom => "custom",
        }
    }
}

impl std::str::FromStr for AudienceSelection {
    type Err = PhishSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AudienceSelection::All),
            "department" => Ok(AudienceSelection::Department),
            "role" => Ok(AudienceSelection::Role),
            "custom" => Ok(AudienceSelection::Custom),
            other => Err(PhishSimError::Validation(format!(
                "unknown audience selection '{other}'"
            ))),
        }
    }
}

/// An employee who can be targeted by a simulation. Static reference data
/// in the current scope; there is no creation or mutation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
    pub email: String,
    pub department: String,
}

/// What a recipient did with a simulated phishing message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Clicked,
    Submitted,
    Reported,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Clicked => "clicked",
            InteractionKind::Submitted => "submitted",
            InteractionKind::Reported => "reported",
        }
    }
}
