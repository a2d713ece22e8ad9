// ForecastSource implementations: live page and saved markup
use crate::application::forecast_source::ForecastSource;
use crate::domain::error::{PipelineError, Result};
use crate::domain::forecast::ForecastReading;
use crate::infrastructure::extractor::extract_reading;
use crate::infrastructure::fetcher::HttpFetcher;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct HttpForecastSource {
    fetcher: HttpFetcher,
    url: String,
}

impl HttpForecastSource {
    pub fn new(fetcher: HttpFetcher, url: String) -> Self {
        Self { fetcher, url }
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    async fn fetch_reading(&self) -> Result<ForecastReading> {
        let markup = self.fetcher.fetch(&self.url).await?;
        extract_reading(&markup)
    }
}

/// Reads a previously saved copy of the page instead of hitting the network.
pub struct FileForecastSource {
    path: PathBuf,
}

impl FileForecastSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ForecastSource for FileForecastSource {
    async fn fetch_reading(&self) -> Result<ForecastReading> {
        tracing::info!("reading forecast markup from {}", self.path.display());
        let markup = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PipelineError::Config(format!("cannot read fixture {}: {}", self.path.display(), e))
        })?;
        extract_reading(&markup)
    }
}
