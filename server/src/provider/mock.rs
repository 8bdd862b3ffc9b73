use super::types::*;
use super::{HistoricalWeatherSource, ProviderError};
use crate::utils::power_date_key;
use async_trait::async_trait;
use chrono::NaiveDate;

/// In-process source reporting the same conditions for every requested day.
#[derive(Debug, Clone)]
pub struct MockPowerSource {
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_ms: f64,
    pub humidity_pct: f64,
    /// Report only the first N days of the requested range
    pub reported_days: Option<usize>,
    pub failure: Option<String>,
}

impl Default for MockPowerSource {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            precipitation_mm: 0.0,
            wind_ms: 3.0,
            humidity_pct: 60.0,
            reported_days: None,
            failure: None,
        }
    }
}

impl MockPowerSource {
    pub fn new(temperature_c: f64, precipitation_mm: f64, wind_ms: f64) -> Self {
        Self {
            temperature_c,
            precipitation_mm,
            wind_ms,
            ..Self::default()
        }
    }

    pub fn reporting_days(mut self, days: usize) -> Self {
        self.reported_days = Some(days);
        self
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl HistoricalWeatherSource for MockPowerSource {
    async fn fetch_daily(
        &self,
        _lat: f64,
        _lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, ProviderError> {
        if let Some(message) = &self.failure {
            return Err(ProviderError::ApiError(message.clone()));
        }

        let limit = self.reported_days.unwrap_or(usize::MAX);
        let mut series = DailySeries::new();

        for date in start.iter_days().take_while(|d| *d <= end).take(limit) {
            let key = power_date_key(date);
            series.insert(TEMPERATURE, &key, self.temperature_c);
            series.insert(TEMPERATURE_MAX, &key, self.temperature_c + 5.0);
            series.insert(TEMPERATURE_MIN, &key, self.temperature_c - 5.0);
            series.insert(PRECIPITATION, &key, self.precipitation_mm);
            series.insert(WIND_SPEED, &key, self.wind_ms);
            series.insert(RELATIVE_HUMIDITY, &key, self.humidity_pct);
        }

        Ok(series)
    }
}
