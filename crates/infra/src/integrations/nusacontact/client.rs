/// NusaContact API client for contact upserts
use async_trait::async_trait;
use contactsync_core::{ContactGateway, GatewayResponse};
use contactsync_domain::constants::API_KEY_HEADER;
use contactsync_domain::{ContactSyncError, NusacontactConfig, Result, SyncPayload};
use reqwest::Method;
use tracing::debug;

use crate::http::HttpClient;

/// Client for the NusaContact contact endpoint
pub struct NusacontactClient {
    http_client: HttpClient,
    api_url: String,
    api_key: String,
}

impl NusacontactClient {
    /// Create a client posting to `api_url` with the given API key.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>, http_client: HttpClient) -> Self {
        Self { http_client, api_url: api_url.into(), api_key: api_key.into() }
    }

    /// Build a client whose per-attempt timeout comes from `config`.
    ///
    /// # Errors
    /// Returns `ContactSyncError::Internal` if the HTTP client cannot be built.
    pub fn from_config(config: &NusacontactConfig) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self::new(config.api_url.clone(), config.api_key.clone(), http_client))
    }
}

#[async_trait]
impl ContactGateway for NusacontactClient {
    async fn post_contact(&self, payload: &SyncPayload) -> Result<GatewayResponse> {
        let request_builder = self
            .http_client
            .request(Method::POST, &self.api_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(payload);

        let response = self.http_client.send(request_builder).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            ContactSyncError::Network(format!("failed to read NusaContact response body: {err}"))
        })?;

        debug!(status, body_len = body.len(), "Received NusaContact API response");

        Ok(GatewayResponse { status, body })
    }
}
