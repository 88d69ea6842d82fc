use crate::core::{ConfigProvider, Fetcher};
use crate::utils::error::{RailError, Result};
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed [`Fetcher`]. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_seconds()));
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(RailError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body.to_vec())
    }
}
