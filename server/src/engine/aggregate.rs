use serde::Serialize;

use super::window::Observation;

/// Window means. Humidity is carried for completeness, nothing scores on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregates {
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_ms: f64,
    pub humidity_pct: f64,
}

/// Arithmetic mean of each parameter over every day of the window. Zero-filled
/// days still count toward the divisor.
pub fn aggregate(days: &[Observation]) -> Aggregates {
    let count = days.len().max(1) as f64;
    let mean = |pick: fn(&Observation) -> f64| days.iter().map(pick).sum::<f64>() / count;

    Aggregates {
        temperature_c: mean(|o| o.temperature_c),
        precipitation_mm: mean(|o| o.precipitation_mm),
        wind_ms: mean(|o| o.wind_ms),
        humidity_pct: mean(|o| o.humidity_pct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(offset: u32, temp: f64, rain: f64, wind: f64, rh: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(2024, 3, 1 + offset).unwrap(),
            temperature_c: temp,
            precipitation_mm: rain,
            wind_ms: wind,
            humidity_pct: rh,
        }
    }

    #[test]
    fn test_mean_of_full_window() {
        let days: Vec<Observation> = (0..7).map(|i| day(i, 20.0 + i as f64, 1.0, 4.0, 50.0)).collect();
        let avg = aggregate(&days);

        assert_eq!(avg.temperature_c, 23.0); // 20..=26
        assert_eq!(avg.precipitation_mm, 1.0);
        assert_eq!(avg.wind_ms, 4.0);
        assert_eq!(avg.humidity_pct, 50.0);
    }

    #[test]
    fn test_zero_filled_days_keep_divisor_at_seven() {
        let mut days: Vec<Observation> = (0..7).map(|i| day(i, 0.0, 0.0, 0.0, 0.0)).collect();
        days[0] = day(0, 14.0, 7.0, 21.0, 70.0);

        let avg = aggregate(&days);

        assert_eq!(avg.temperature_c, 2.0);
        assert_eq!(avg.precipitation_mm, 1.0);
        assert_eq!(avg.wind_ms, 3.0);
        assert_eq!(avg.humidity_pct, 10.0);
    }
}
