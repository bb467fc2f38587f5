use std::{str::FromStr, time::Duration};

use tracing::warn;

pub const DEFAULT_OPENF1_BASE_URL: &str = "https://api.openf1.org/v1";
pub const DEFAULT_TRACK_IMAGE_BASE_URL: &str =
    "https://media.formula1.com/image/upload/content/dam/fom-website/2018-redesign-assets/Circuit%20maps%2016x9";
pub const DEFAULT_FLAG_IMAGE_BASE_URL: &str = "https://flagcdn.com/w320";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub openf1_base_url: String,
    pub bind_addr: String,
    pub log_level: String,
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
    pub request_min_delay: Duration,
    pub stats_first_year: i32,
    pub stats_last_year: i32,
    pub track_image_base_url: String,
    pub flag_image_base_url: String,
}

impl Config {
    pub fn init() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let stats_first_year = parsed(&lookup, "STATS_FIRST_YEAR", 2022);
        let mut stats_last_year = parsed(&lookup, "STATS_LAST_YEAR", 2025);
        if stats_last_year < stats_first_year {
            warn!(
                "STATS_LAST_YEAR {} is before STATS_FIRST_YEAR {}, using a single season",
                stats_last_year, stats_first_year
            );
            stats_last_year = stats_first_year;
        }

        Config {
            openf1_base_url: text("OPENF1_BASE_URL", DEFAULT_OPENF1_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            bind_addr: text("BIND_ADDR", "127.0.0.1:3000"),
            log_level: text("LOG_LEVEL", "info").to_lowercase(),
            request_timeout: Duration::from_secs(parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30)),
            max_concurrent_requests: parsed(&lookup, "MAX_CONCURRENT_REQUESTS", 4usize).max(1),
            request_min_delay: Duration::from_millis(parsed(&lookup, "REQUEST_MIN_DELAY_MS", 100)),
            stats_first_year,
            stats_last_year,
            track_image_base_url: text("TRACK_IMAGE_BASE_URL", DEFAULT_TRACK_IMAGE_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            flag_image_base_url: text("FLAG_IMAGE_BASE_URL", DEFAULT_FLAG_IMAGE_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Seasons covered by driver statistics, oldest first.
    pub fn stats_years(&self) -> std::ops::RangeInclusive<i32> {
        self.stats_first_year..=self.stats_last_year
    }
}

fn parsed<T: FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]);
        assert_eq!(config.openf1_base_url, DEFAULT_OPENF1_BASE_URL);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrent_requests, 4);
        assert_eq!(config.request_min_delay, Duration::from_millis(100));
        assert_eq!(config.stats_years(), 2022..=2025);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("OPENF1_BASE_URL", "http://localhost:8080/v1/"),
            ("LOG_LEVEL", "DEBUG"),
            ("REQUEST_MIN_DELAY_MS", "0"),
            ("STATS_FIRST_YEAR", "2023"),
            ("STATS_LAST_YEAR", "2024"),
        ]);
        assert_eq!(config.openf1_base_url, "http://localhost:8080/v1");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_min_delay, Duration::ZERO);
        assert_eq!(config.stats_years(), 2023..=2024);
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let config = config_from(&[
            ("REQUEST_TIMEOUT_SECS", "soon"),
            ("MAX_CONCURRENT_REQUESTS", "0"),
            ("STATS_FIRST_YEAR", "2025"),
            ("STATS_LAST_YEAR", "2020"),
        ]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrent_requests, 1);
        assert_eq!(config.stats_years(), 2025..=2025);
    }
}
