// HTTP fetcher for the forecast page
use crate::domain::error::{PipelineError, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: Option<String>,
    /// Honour HTTP(S)_PROXY from the environment.
    pub system_proxy: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: None,
            system_proxy: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(options.timeout);
        if let Some(agent) = &options.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        if !options.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| PipelineError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// One GET, no retries. Non-2xx responses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Network(format!("{} returned status {}", url, status)));
        }

        let body = response.text().await?;
        tracing::debug!("received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
