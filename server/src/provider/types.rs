use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TEMPERATURE: &str = "T2M";
pub const TEMPERATURE_MAX: &str = "T2M_MAX";
pub const TEMPERATURE_MIN: &str = "T2M_MIN";
pub const PRECIPITATION: &str = "PRECTOTCORR";
pub const WIND_SPEED: &str = "WS10M";
pub const RELATIVE_HUMIDITY: &str = "RH2M";

/// Parameters requested from the daily point endpoint, in request order.
pub const REQUESTED_PARAMETERS: [&str; 6] = [
    TEMPERATURE,
    TEMPERATURE_MAX,
    TEMPERATURE_MIN,
    PRECIPITATION,
    WIND_SPEED,
    RELATIVE_HUMIDITY,
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerResponse {
    pub properties: PowerProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerProperties {
    /// parameter name -> YYYYMMDD -> value
    pub parameter: BTreeMap<String, BTreeMap<String, Option<f64>>>,
}

/// Per-day parameter values for one coordinate, keyed by parameter then YYYYMMDD.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    parameters: BTreeMap<String, BTreeMap<String, f64>>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parameter: &str, date_key: &str, value: f64) {
        self.parameters
            .entry(parameter.to_string())
            .or_default()
            .insert(date_key.to_string(), value);
    }

    pub fn value(&self, parameter: &str, date_key: &str) -> Option<f64> {
        self.parameters
            .get(parameter)
            .and_then(|days| days.get(date_key))
            .copied()
    }

    /// True when any of `parameters` reported a value for the date.
    pub fn has_reading(&self, date_key: &str, parameters: &[&str]) -> bool {
        parameters
            .iter()
            .any(|parameter| self.value(parameter, date_key).is_some())
    }
}

impl From<PowerResponse> for DailySeries {
    fn from(response: PowerResponse) -> Self {
        let mut series = DailySeries::new();
        for (parameter, days) in response.properties.parameter {
            for (date_key, value) in days {
                if let Some(value) = value {
                    series.insert(&parameter, &date_key, value);
                }
            }
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_from_power_response_skips_nulls() {
        let body = r#"{
            "type": "Feature",
            "properties": {
                "parameter": {
                    "T2M": { "20240301": 12.5, "20240302": null },
                    "WS10M": { "20240302": 4.0 }
                }
            }
        }"#;

        let response: PowerResponse = serde_json::from_str(body).unwrap();
        let series = DailySeries::from(response);

        assert_eq!(series.value(TEMPERATURE, "20240301"), Some(12.5));
        assert_eq!(series.value(TEMPERATURE, "20240302"), None);
        assert_eq!(series.value(WIND_SPEED, "20240302"), Some(4.0));
        assert!(series.has_reading("20240302", &[TEMPERATURE, WIND_SPEED]));
        assert!(!series.has_reading("20240302", &[TEMPERATURE]));
        assert!(!series.has_reading("20240303", &REQUESTED_PARAMETERS));
    }
}
