/// HTTP implementation of the monkey source
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::models::{Monkey, SourceConfig};
use crate::domain::ports::MonkeySource;

/// Build the shared HTTP client used for every fetch
///
/// A single client is created at startup and handed to each source so its
/// connection pool is reused across calls. No timeout is set unless the
/// configuration asks for one.
pub fn build_http_client(config: &SourceConfig) -> Result<ReqwestClient> {
    let mut builder = ReqwestClient::builder()
        .user_agent(config.user_agent.clone())
        .pool_max_idle_per_host(10);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().context("Failed to build HTTP client")
}

/// Fetches the monkey collection with a single GET against a fixed URL
#[derive(Clone)]
pub struct HttpMonkeySource {
    /// Injected, shared HTTP client
    http_client: ReqwestClient,

    /// Endpoint returning a JSON array of monkeys
    url: String,
}

impl HttpMonkeySource {
    pub fn new(http_client: ReqwestClient, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl MonkeySource for HttpMonkeySource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_monkeys(&self) -> FetchResult<Option<Vec<Monkey>>> {
        let response = self
            .http_client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        debug!(bytes = bytes.len(), "received monkey payload");

        let monkeys: Option<Vec<Monkey>> = serde_json::from_slice(&bytes)?;
        Ok(monkeys)
    }
}
