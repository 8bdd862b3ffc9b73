use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

use super::EngineError;
use crate::provider::types::*;
use crate::utils::power_date_key;

pub const WINDOW_DAYS: usize = 7;

/// Parameters an `Observation` is built from.
pub const OBSERVED_PARAMETERS: [&str; 4] =
    [TEMPERATURE, PRECIPITATION, WIND_SPEED, RELATIVE_HUMIDITY];

/// Inclusive calendar span of the observation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WindowSpan {
    /// Seven days ending at `min(target, now)`. A future target never moves the
    /// window past today.
    pub fn select(target: DateTime<Utc>, now: DateTime<Utc>) -> Result<Self, EngineError> {
        let end = target.min(now).date_naive();
        let start = end
            .checked_sub_days(Days::new(WINDOW_DAYS as u64 - 1))
            .ok_or_else(|| EngineError::Validation(format!("Date out of range: {}", target)))?;
        Ok(Self { start, end })
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .collect()
    }

    pub fn date_keys(&self) -> Vec<String> {
        self.dates().into_iter().map(power_date_key).collect()
    }
}

/// One calendar day of raw values. Anything the provider did not report is 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_ms: f64,
    pub humidity_pct: f64,
}

impl Observation {
    pub fn from_series(series: &DailySeries, date: NaiveDate) -> Self {
        let key = power_date_key(date);
        let read = |parameter: &str| series.value(parameter, &key).unwrap_or(0.0);

        Self {
            date,
            temperature_c: read(TEMPERATURE),
            precipitation_mm: read(PRECIPITATION),
            wind_ms: read(WIND_SPEED),
            humidity_pct: read(RELATIVE_HUMIDITY),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObservationWindow {
    days: Vec<Observation>,
}

impl ObservationWindow {
    /// Zero-fills every window date the provider skipped. Fails when no
    /// observed parameter has a value on any window date.
    pub fn ingest(span: WindowSpan, series: &DailySeries) -> Result<Self, EngineError> {
        let reported = span
            .date_keys()
            .iter()
            .filter(|key| series.has_reading(key, &OBSERVED_PARAMETERS))
            .count();
        if reported == 0 {
            return Err(EngineError::EmptyWindow);
        }

        let days = span
            .dates()
            .into_iter()
            .map(|date| Observation::from_series(series, date))
            .collect();

        Ok(Self { days })
    }

    pub fn days(&self) -> &[Observation] {
        &self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_future_target_anchors_on_now() {
        let now = at(2024, 3, 10, 12);
        let span = WindowSpan::select(now + Duration::days(30), now).unwrap();

        assert_eq!(span.end, ymd(2024, 3, 10));
        assert_eq!(span.start, ymd(2024, 3, 4));
    }

    #[test]
    fn test_past_target_anchors_on_target() {
        let now = at(2024, 3, 10, 12);
        let span = WindowSpan::select(at(2019, 1, 3, 0), now).unwrap();

        assert_eq!(span.end, ymd(2019, 1, 3));
        assert_eq!(span.start, ymd(2018, 12, 28));
    }

    #[test]
    fn test_span_has_seven_consecutive_days() {
        let now = at(2024, 3, 2, 0);
        let span = WindowSpan::select(now, now).unwrap();
        let dates = span.dates();

        assert_eq!(dates.len(), WINDOW_DAYS);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(
            span.date_keys(),
            vec!["20240225", "20240226", "20240227", "20240228", "20240229", "20240301", "20240302"]
        );
    }

    #[test]
    fn test_ingest_zero_fills_missing_days() {
        let span = WindowSpan {
            start: ymd(2024, 3, 1),
            end: ymd(2024, 3, 7),
        };
        let mut series = DailySeries::new();
        series.insert(TEMPERATURE, "20240301", 14.0);
        series.insert(PRECIPITATION, "20240303", 2.0);

        let window = ObservationWindow::ingest(span, &series).unwrap();

        assert_eq!(window.days().len(), WINDOW_DAYS);
        assert_eq!(window.days()[0].temperature_c, 14.0);
        assert_eq!(window.days()[0].precipitation_mm, 0.0);
        assert_eq!(window.days()[2].precipitation_mm, 2.0);
        assert_eq!(window.days()[6].wind_ms, 0.0);
        assert_eq!(window.days()[6].date, ymd(2024, 3, 7));
    }

    #[test]
    fn test_ingest_rejects_window_without_reports() {
        let span = WindowSpan {
            start: ymd(2024, 3, 1),
            end: ymd(2024, 3, 7),
        };
        let mut series = DailySeries::new();
        series.insert(TEMPERATURE, "20240220", 14.0);

        let err = ObservationWindow::ingest(span, &series).unwrap_err();
        assert!(matches!(err, EngineError::EmptyWindow));
    }

    #[test]
    fn test_ingest_ignores_unobserved_parameters() {
        let span = WindowSpan {
            start: ymd(2024, 3, 1),
            end: ymd(2024, 3, 7),
        };
        let mut series = DailySeries::new();
        series.insert(TEMPERATURE_MAX, "20240301", 14.0);
        series.insert(TEMPERATURE_MIN, "20240302", 3.0);

        let err = ObservationWindow::ingest(span, &series).unwrap_err();
        assert!(matches!(err, EngineError::EmptyWindow));
    }
}
