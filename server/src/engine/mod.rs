pub mod aggregate;
pub mod chart;
pub mod events;
pub mod likelihood;
pub mod window;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;
use crate::provider::{HistoricalWeatherSource, ProviderError};
use crate::utils::{round_half_up, validate_coordinates};
use aggregate::aggregate;
use chart::{chart_series, ChartPoint};
use events::{recommend, Recommendation};
use likelihood::{estimate, LikelihoodSet};
use window::{ObservationWindow, WindowSpan};

pub const MISSING_PARAMETERS: &str = "Missing required parameters: lat, lon, date";

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("Upstream provider failed: {0}")]
    Upstream(#[from] ProviderError),
    #[error("Upstream provider returned no observations for the window")]
    EmptyWindow,
}

/// Raw query string of `GET /api/weather`.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRequest {
    pub lat: f64,
    pub lon: f64,
    pub target: DateTime<Utc>,
}

impl WeatherRequest {
    pub fn from_query(query: &WeatherQuery) -> Result<Self, EngineError> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let (Some(lat), Some(lon), Some(date)) =
            (present(&query.lat), present(&query.lon), present(&query.date))
        else {
            return Err(EngineError::Validation(MISSING_PARAMETERS.to_string()));
        };

        let lat: f64 = lat
            .parse()
            .map_err(|_| EngineError::Validation(format!("Invalid latitude: {}", lat)))?;
        let lon: f64 = lon
            .parse()
            .map_err(|_| EngineError::Validation(format!("Invalid longitude: {}", lon)))?;
        validate_coordinates(lat, lon).map_err(EngineError::Validation)?;

        Ok(Self {
            lat,
            lon,
            target: parse_target_date(&date)?,
        })
    }
}

/// RFC 3339 timestamps, offset-less timestamps and bare dates, all read as UTC.
fn parse_target_date(raw: &str) -> Result<DateTime<Utc>, EngineError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| EngineError::Validation(format!("Invalid date: {}", raw)))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResult {
    #[serde(flatten)]
    pub likelihood: LikelihoodSet,
    pub temperature: i64,
    pub chart_data: Vec<ChartPoint>,
    pub is_future: bool,
    pub recommendations: Vec<Recommendation>,
}

/// Fetch the observation window for the request and derive likelihoods,
/// event recommendations and the chart series from it.
pub async fn assess(
    source: &dyn HistoricalWeatherSource,
    clock: &dyn Clock,
    request: WeatherRequest,
) -> Result<WeatherResult, EngineError> {
    let now = clock.now();
    let is_future = request.target > now;
    let span = WindowSpan::select(request.target, now)?;

    tracing::debug!(
        "Assessing ({}, {}) for {}: window {}..={}, future={}",
        request.lat,
        request.lon,
        request.target,
        span.start,
        span.end,
        is_future
    );

    let series = source
        .fetch_daily(request.lat, request.lon, span.start, span.end)
        .await?;
    let window = ObservationWindow::ingest(span, &series)?;

    let means = aggregate(window.days());
    let risk = estimate(&means, is_future);

    Ok(WeatherResult {
        likelihood: risk.percentages(),
        temperature: round_half_up(means.temperature_c),
        chart_data: chart_series(window.days()),
        is_future,
        recommendations: recommend(&risk, means.temperature_c, is_future),
    })
}
