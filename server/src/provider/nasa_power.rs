use super::types::*;
use super::{HistoricalWeatherSource, ProviderError};
use crate::config::Config;
use crate::utils::{power_date_key, validate_coordinates};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

pub struct NasaPowerClient {
    client: Client,
    daily_url: String,
    community: String,
}

impl NasaPowerClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent("EventWeatherServer/1.0")
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            daily_url: format!(
                "{}{}",
                config.nasa_power_base_url, config.nasa_power_daily_path
            ),
            community: config.nasa_power_community.clone(),
        })
    }

    fn query_params(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("parameters", REQUESTED_PARAMETERS.join(",")),
            ("community", self.community.clone()),
            ("longitude", lon.to_string()),
            ("latitude", lat.to_string()),
            ("start", power_date_key(start)),
            ("end", power_date_key(end)),
            ("format", "JSON".to_string()),
        ]
    }
}

#[async_trait]
impl HistoricalWeatherSource for NasaPowerClient {
    async fn fetch_daily(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, ProviderError> {
        if validate_coordinates(lat, lon).is_err() {
            return Err(ProviderError::InvalidCoordinates);
        }

        let params = self.query_params(lat, lon, start, end);
        tracing::debug!(
            "Requesting daily point data for ({}, {}) from {} to {}",
            lat,
            lon,
            start,
            end
        );

        let response = self
            .client
            .get(&self.daily_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &error_text));
        }

        let body = response.text().await?;
        parse_daily_body(&body)
    }
}

pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
    ProviderError::ApiError(format!("HTTP {}: {}", status, body.trim()))
}

pub(crate) fn parse_daily_body(body: &str) -> Result<DailySeries, ProviderError> {
    let payload: PowerResponse = serde_json::from_str(body)?;
    Ok(DailySeries::from(payload))
}
