use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Validate latitude and longitude coordinates
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), String> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Invalid latitude: {}. Must be between -90 and 90", lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(format!("Invalid longitude: {}. Must be between -180 and 180", lon));
    }
    Ok(())
}

/// Clamp a value between min and max
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round to the nearest integer, halves toward positive infinity (-2.5 -> -2)
pub fn round_half_up(value: f64) -> i64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// Date key used by the daily point API, e.g. 20240315
pub fn power_date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Error response helper
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            code: code.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(40.71, -74.01).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, 181.0).is_err());
        assert!(validate_coordinates(-90.0, -180.0).is_ok());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(33.333), 33);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(-0.49999999999999994), 0);
    }

    #[test]
    fn test_power_date_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(power_date_key(date), "20240305");
    }
}
