use std::time::Duration;

use contactsync_domain::{ContactSyncError, Result};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with a per-request timeout.
///
/// Sends each request exactly once. Retry decisions belong to the caller,
/// which sees every status code as a response.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once.
    ///
    /// Only failures that produce no response (timeouts, refused
    /// connections, malformed requests) are returned as errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().map_err(into_domain)?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(into_domain(err))
            }
        }
    }
}

fn into_domain(err: reqwest::Error) -> ContactSyncError {
    InfraError::from(err).into()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30) }
    }
}

const USER_AGENT: &str = concat!("contactsync/", env!("CARGO_PKG_VERSION"));

impl HttpClientBuilder {
    /// Whole-request timeout, covering connect, send and the response body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `ContactSyncError::Internal` if the TLS backend fails to
    /// initialise.
    pub fn build(self) -> Result<HttpClient> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(into_domain)?;

        Ok(HttpClient { client })
    }
}
