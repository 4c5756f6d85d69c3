//! Campaign store gateway — mediates all campaign data access, masking
//! whether an external store is configured behind a uniform interface.
//!
//! With no store configured the gateway serves fixed sample data, so the
//! dashboard stays fully explorable in a fresh checkout.

pub mod config;
pub mod gateway;
pub mod remote;
pub mod samples;

pub use config::StoreConfig;
pub use gateway::CampaignGateway;
