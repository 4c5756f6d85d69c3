//! The campaign store gateway. Constructed once at startup with a resolved
//! [`StoreConfig`] and shared by reference; there is no module-level client
//! singleton.

use std::time::Duration;

use chrono::Utc;
use phishsim_core::error::{PhishSimError, PhishSimResult};
use phishsim_core::types::{Campaign, CampaignDraft, InteractionKind, Recipient};
use rand::Rng;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::remote::RemoteStore;
use crate::samples;

pub struct CampaignGateway {
    config: StoreConfig,
    remote: Option<RemoteStore>,
}

impl CampaignGateway {
    pub fn new(config: StoreConfig, connect_timeout_ms: u64) -> PhishSimResult<Self> {
        let remote = match &config {
            StoreConfig::Connected {
                endpoint,
                service_key,
            } => {
                info!(endpoint = %endpoint, "Campaign store connected");
                Some(RemoteStore::new(
                    endpoint.clone(),
                    service_key.clone(),
                    Duration::from_millis(connect_timeout_ms),
                )?)
            }
            StoreConfig::Unconfigured => {
                info!("No campaign store configured, serving sample data");
                None
            }
        };
        Ok(Self { config, remote })
    }

    /// True when operations are served from the built-in sample data. The
    /// dashboard uses this to show its configuration warning; returned
    /// value shapes are identical in both modes.
    pub fn is_fallback(&self) -> bool {
        self.remote.is_none()
    }

    pub fn mode_label(&self) -> &'static str {
        self.config.mode_label()
    }

    /// All campaigns, newest first. Never errors: a store fault is logged
    /// and the sample sequence is returned instead.
    pub async fn list_campaigns(&self) -> Vec<Campaign> {
        if let Some(remote) = &self.remote {
            match remote.list_campaigns().await {
                Ok(campaigns) => return campaigns,
                Err(e) => {
                    error!(error = %e, "Failed to list campaigns, serving sample data");
                    metrics::counter!("store.read_faults").increment(1);
                }
            }
        }
        samples::sample_campaigns()
    }

    /// The campaign matching `id`, if any. A store fault degrades to an
    /// equality scan over the sample sequence.
    pub async fn get_campaign(&self, id: &str) -> Option<Campaign> {
        if let Some(remote) = &self.remote {
            match remote.fetch_campaign(id).await {
                Ok(campaign) => return campaign,
                Err(e) => {
                    error!(error = %e, campaign_id = id, "Failed to fetch campaign, scanning sample data");
                    metrics::counter!("store.read_faults").increment(1);
                }
            }
        }
        samples::sample_campaigns().into_iter().find(|c| c.id == id)
    }

    /// Store a new campaign. System-owned fields are assigned here: a fresh
    /// identifier, zeroed rates, and the creation timestamp. Unlike the
    /// read paths, a store fault is reported as an error, never papered
    /// over with fabricated data.
    pub async fn create_campaign(&self, draft: CampaignDraft) -> PhishSimResult<Campaign> {
        let mut campaign = Campaign {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            template: draft.template,
            audience: draft.audience,
            department: draft.department,
            recipients: 0,
            click_rate: 0.0,
            submission_rate: 0.0,
            report_rate: 0.0,
            created_at: Utc::now(),
        };

        match &self.remote {
            Some(remote) => {
                let stored = remote.insert_campaign(&campaign).await.map_err(|e| {
                    error!(error = %e, campaign = %campaign.name, "Failed to create campaign");
                    metrics::counter!("store.write_faults").increment(1);
                    PhishSimError::Store("campaign insert failed".into())
                })?;
                Ok(stored)
            }
            None => {
                // Placeholder until audience resolution exists; the sample
                // list itself is never mutated.
                campaign.recipients = rand::thread_rng().gen_range(50..150);
                info!(
                    campaign_id = %campaign.id,
                    name = %campaign.name,
                    "Sample-data mode: campaign acknowledged but not persisted"
                );
                Ok(campaign)
            }
        }
    }

    /// Acknowledge a recipient interaction. There is no interaction table
    /// in the current store schema, so this records nothing; the call site
    /// contract is stable for when persistence lands.
    pub async fn record_interaction(
        &self,
        campaign_id: &str,
        email: &str,
        kind: InteractionKind,
    ) -> bool {
        debug!(
            campaign_id,
            email,
            kind = kind.as_str(),
            "Interaction acknowledged (not persisted)"
        );
        metrics::counter!("store.interactions_acknowledged").increment(1);
        true
    }

    /// Static recipient reference data.
    pub fn recipients(&self) -> Vec<Recipient> {
        samples::sample_recipients()
    }
}
