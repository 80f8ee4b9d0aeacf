//! HTTP client for the SolarEdge monitoring cloud API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{SiteDetailsResponse, SiteOverviewResponse};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::logging::{StructuredLogger, get_logger};

/// Production root of the monitoring API
pub const DEFAULT_BASE_URL: &str = "https://monitoringapi.solaredge.com";

/// Build a pooled HTTP session for hosts that do not supply one.
///
/// Hosts normally pass their own shared session into the integration; this
/// helper exists for standalone use and tooling.
pub fn build_session(config: &ApiConfig) -> Result<Client> {
    Ok(Client::builder()
        .user_agent("aethon")
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?)
}

/// Surface of the monitoring API used by the integration and its platforms.
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// Fetch site master data (`site/{id}/details.json`)
    async fn site_details(&self, site_id: &str) -> Result<SiteDetailsResponse>;

    /// Fetch the aggregate production overview (`site/{id}/overview.json`)
    async fn site_overview(&self, site_id: &str) -> Result<SiteOverviewResponse>;
}

/// Monitoring API client bound to one API key and a shared HTTP session
pub struct SolarEdgeClient {
    session: Client,
    api_key: String,
    base_url: String,
    logger: StructuredLogger,
}

impl SolarEdgeClient {
    /// Create a new client from an API key and the host-shared session
    pub fn new<S: Into<String>>(api_key: S, session: Client) -> Self {
        Self {
            session,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            logger: get_logger("api"),
        }
    }

    /// Point the client at a different API root (proxies, tests)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.logger.debug(&format!("GET {}", path));
        let response = self
            .session
            .get(format!("{}/{}", self.base_url, path))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl SiteApi for SolarEdgeClient {
    async fn site_details(&self, site_id: &str) -> Result<SiteDetailsResponse> {
        self.get_json(&format!("site/{}/details.json", site_id))
            .await
    }

    async fn site_overview(&self, site_id: &str) -> Result<SiteOverviewResponse> {
        self.get_json(&format!("site/{}/overview.json", site_id))
            .await
    }
}
