use serde::Serialize;

use super::window::Observation;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Short label such as "Mar 5"
    pub date: String,
    pub temperature: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
}

pub fn chart_series(days: &[Observation]) -> Vec<ChartPoint> {
    days.iter()
        .map(|day| ChartPoint {
            date: day.date.format("%b %-d").to_string(),
            temperature: day.temperature_c,
            rainfall: day.precipitation_mm,
            wind_speed: day.wind_ms,
        })
        .collect()
}
