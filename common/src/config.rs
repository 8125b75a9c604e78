use crate::constants::{
    GEOCODER_URL, HTTP_TIMEOUT_SECONDS, KITCHEN_API_URL, POLL_INTERVAL_MILLIS, ROUTER_URL,
};
use crate::errors::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings shared by both binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub geocoder_url: String,
    pub router_url: String,
    /// Período del sondeo de ubicación del repartidor.
    pub poll_interval: Duration,
    /// `None` keeps polling forever after failures.
    pub max_consecutive_failures: Option<u32>,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: KITCHEN_API_URL.to_string(),
            api_token: None,
            geocoder_url: GEOCODER_URL.to_string(),
            router_url: ROUTER_URL.to_string(),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MILLIS),
            max_consecutive_failures: None,
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECONDS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("KITCHEN_API_URL") {
            config.api_base_url = url;
        }
        config.api_token = get("KITCHEN_API_TOKEN");
        if let Some(url) = get("GEOCODER_URL") {
            config.geocoder_url = url;
        }
        if let Some(url) = get("ROUTER_URL") {
            config.router_url = url;
        }
        if let Some(millis) = parse_var::<u64>("TRACKER_POLL_MS", get("TRACKER_POLL_MS"))? {
            if millis == 0 {
                return Err(ConfigError {
                    var: "TRACKER_POLL_MS".into(),
                    value: millis.to_string(),
                });
            }
            config.poll_interval = Duration::from_millis(millis);
        }
        config.max_consecutive_failures =
            parse_var::<u32>("TRACKER_MAX_FAILURES", get("TRACKER_MAX_FAILURES"))?
                .filter(|max| *max > 0);
        if let Some(secs) = parse_var::<u64>("HTTP_TIMEOUT_SECS", get("HTTP_TIMEOUT_SECS"))? {
            if secs == 0 {
                return Err(ConfigError {
                    var: "HTTP_TIMEOUT_SECS".into(),
                    value: secs.to_string(),
                });
            }
            config.http_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn parse_var<T: FromStr>(var: &str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError {
                var: var.to_string(),
                value,
            }),
    }
}
