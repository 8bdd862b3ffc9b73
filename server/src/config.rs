use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub weather_provider: String,
    pub nasa_power_base_url: String,
    pub nasa_power_daily_path: String,
    pub nasa_power_community: String,
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            weather_provider: "nasa-power".to_string(),
            nasa_power_base_url: "https://power.larc.nasa.gov".to_string(),
            nasa_power_daily_path: "/api/temporal/daily/point".to_string(),
            nasa_power_community: "AG".to_string(),
            upstream_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Config::default();

        let upstream_timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => defaults.upstream_timeout_secs,
        };

        Ok(Config {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            weather_provider: env::var("WEATHER_PROVIDER").unwrap_or(defaults.weather_provider),
            nasa_power_base_url: env::var("NASA_POWER_BASE_URL")
                .unwrap_or(defaults.nasa_power_base_url),
            nasa_power_daily_path: env::var("NASA_POWER_DAILY_PATH")
                .unwrap_or(defaults.nasa_power_daily_path),
            nasa_power_community: env::var("NASA_POWER_COMMUNITY")
                .unwrap_or(defaults.nasa_power_community),
            upstream_timeout_secs,
        })
    }
}

fn parse_timeout(raw: &str) -> anyhow::Result<u64> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw))?;
    if secs == 0 {
        return Err(anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be greater than zero"));
    }
    Ok(secs)
}
