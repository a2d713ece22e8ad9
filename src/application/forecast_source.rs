// Source trait for cloth-drying forecasts
use crate::domain::error::Result;
use crate::domain::forecast::ForecastReading;
use async_trait::async_trait;

#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch and extract one complete reading. Partial readings are never returned.
    async fn fetch_reading(&self) -> Result<ForecastReading>;
}
