//! REST client for the hosted campaign store.
//!
//! Speaks the PostgREST dialect the hosted store exposes: row filters and
//! ordering as query parameters under `/rest/v1/<table>`, the access key in
//! both the `apikey` header and a bearer token.

use std::time::Duration;

use phishsim_core::error::{PhishSimError, PhishSimResult};
use phishsim_core::types::Campaign;
use url::Url;

const CAMPAIGNS_TABLE: &str = "rest/v1/campaigns";

pub struct RemoteStore {
    client: reqwest::Client,
    endpoint: Url,
    service_key: String,
}

impl RemoteStore {
    pub fn new(endpoint: Url, service_key: String, connect_timeout: Duration) -> PhishSimResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(store_err)?;
        Ok(Self {
            client,
            endpoint,
            service_key,
        })
    }

    fn table_url(&self) -> PhishSimResult<Url> {
        self.endpoint
            .join(CAMPAIGNS_TABLE)
            .map_err(|e| PhishSimError::Store(format!("invalid store endpoint: {e}")))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// All campaigns, newest creation timestamp first.
    pub async fn list_campaigns(&self) -> PhishSimResult<Vec<Campaign>> {
        let request = self
            .client
            .get(self.table_url()?)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(store_err)?
            .error_for_status()
            .map_err(store_err)?;
        response.json().await.map_err(store_err)
    }

    /// A single campaign by identifier, or `None` when no row matches.
    pub async fn fetch_campaign(&self, id: &str) -> PhishSimResult<Option<Campaign>> {
        let id_filter = format!("eq.{id}");
        let request = self.client.get(self.table_url()?).query(&[
            ("select", "*"),
            ("id", id_filter.as_str()),
            ("limit", "1"),
        ]);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(store_err)?
            .error_for_status()
            .map_err(store_err)?;
        let rows: Vec<Campaign> = response.json().await.map_err(store_err)?;
        Ok(rows.into_iter().next())
    }

    /// Insert a campaign row and return the stored representation.
    pub async fn insert_campaign(&self, campaign: &Campaign) -> PhishSimResult<Campaign> {
        let request = self
            .client
            .post(self.table_url()?)
            .header("Prefer", "return=representation")
            .json(campaign);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(store_err)?
            .error_for_status()
            .map_err(store_err)?;
        let rows: Vec<Campaign> = response.json().await.map_err(store_err)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| PhishSimError::Store("insert returned no rows".into()))
    }
}

fn store_err(e: reqwest::Error) -> PhishSimError {
    PhishSimError::Store(e.to_string())
}
