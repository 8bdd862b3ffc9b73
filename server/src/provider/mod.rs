pub mod mock;
pub mod nasa_power;
pub mod types;

use crate::config::Config;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use types::DailySeries;

use mock::MockPowerSource;
use nasa_power::NasaPowerClient;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),
    #[error("Upstream request timed out")]
    Timeout,
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Invalid coordinates")]
    InvalidCoordinates,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::RequestFailed(err)
        }
    }
}

/// Upstream supplier of daily historical parameters for a point and date range.
#[async_trait]
pub trait HistoricalWeatherSource: Send + Sync {
    async fn fetch_daily(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, ProviderError>;
}

pub fn source_from_config(config: &Config) -> anyhow::Result<Arc<dyn HistoricalWeatherSource>> {
    let source: Arc<dyn HistoricalWeatherSource> = match config.weather_provider.to_lowercase().as_str() {
        "nasa-power" => Arc::new(NasaPowerClient::new(config)?),
        "mock" => Arc::new(MockPowerSource::default()),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown weather provider '{}'. Supported providers: nasa-power, mock.",
                other
            ))
        }
    };
    Ok(source)
}
