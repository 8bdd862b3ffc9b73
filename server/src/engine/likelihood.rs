use serde::Serialize;

use super::aggregate::Aggregates;
use crate::utils::{clamp, round_half_up};

/// Rain share used when the window recorded no precipitation at all.
pub const BASELINE_RAIN_PCT: f64 = 10.0;

/// Clamped but unrounded risk percentages. The recommender scores on these.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskEstimate {
    pub rain: f64,
    pub hot: f64,
    pub cold: f64,
    pub wind: f64,
}

/// Integer percentages as reported to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LikelihoodSet {
    pub rain: u8,
    pub hot: u8,
    pub cold: u8,
    pub wind: u8,
}

pub fn estimate(aggregates: &Aggregates, is_future: bool) -> RiskEstimate {
    if !is_future {
        return RiskEstimate::default();
    }

    let precip = aggregates.precipitation_mm;
    let temp = aggregates.temperature_c;
    let wind = aggregates.wind_ms;

    let rain = if precip > 0.0 {
        precip / 10.0 * 100.0
    } else {
        BASELINE_RAIN_PCT
    };
    let hot = if temp > 30.0 { (temp - 30.0) / 15.0 * 100.0 } else { 0.0 };
    let cold = if temp < 10.0 { (10.0 - temp) / 15.0 * 100.0 } else { 0.0 };
    let wind = if wind > 5.0 { (wind - 5.0) / 10.0 * 100.0 } else { 0.0 };

    RiskEstimate {
        rain: clamp(rain, 0.0, 100.0),
        hot: clamp(hot, 0.0, 100.0),
        cold: clamp(cold, 0.0, 100.0),
        wind: clamp(wind, 0.0, 100.0),
    }
}

impl RiskEstimate {
    pub fn percentages(&self) -> LikelihoodSet {
        let pct = |value: f64| round_half_up(clamp(value, 0.0, 100.0)) as u8;
        LikelihoodSet {
            rain: pct(self.rain),
            hot: pct(self.hot),
            cold: pct(self.cold),
            wind: pct(self.wind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates(temp: f64, precip: f64, wind: f64) -> Aggregates {
        Aggregates {
            temperature_c: temp,
            precipitation_mm: precip,
            wind_ms: wind,
            humidity_pct: 55.0,
        }
    }

    #[test]
    fn test_historical_mode_is_all_zero() {
        let risk = estimate(&aggregates(40.0, 12.0, 20.0), false);
        assert_eq!(risk, RiskEstimate::default());
        assert_eq!(risk.percentages(), LikelihoodSet::default());
    }

    #[test]
    fn test_dry_window_keeps_baseline_rain() {
        let risk = estimate(&aggregates(20.0, 0.0, 2.0), true);
        assert_eq!(risk.percentages().rain, 10);
    }

    #[test]
    fn test_small_precipitation_scales_below_baseline() {
        let risk = estimate(&aggregates(20.0, 0.2, 2.0), true);
        assert!((risk.rain - 2.0).abs() < 1e-9);
        assert_eq!(risk.percentages().rain, 2);
    }

    #[test]
    fn test_hot_at_thirty_five_degrees() {
        let risk = estimate(&aggregates(35.0, 0.0, 0.0), true);
        assert_eq!(risk.percentages().hot, 33);
        assert_eq!(risk.percentages().cold, 0);
    }

    #[test]
    fn test_cold_and_wind_formulas() {
        let risk = estimate(&aggregates(4.0, 0.0, 8.0), true);
        assert!((risk.cold - 40.0).abs() < 1e-9);
        assert!((risk.wind - 30.0).abs() < 1e-9);
        assert_eq!(risk.percentages().hot, 0);
    }

    #[test]
    fn test_extremes_clamp_to_hundred() {
        let risk = estimate(&aggregates(-30.0, 45.0, 40.0), true);
        let pct = risk.percentages();
        assert_eq!(pct.rain, 100);
        assert_eq!(pct.cold, 100);
        assert_eq!(pct.wind, 100);
        assert_eq!(pct.hot, 0);
    }
}
