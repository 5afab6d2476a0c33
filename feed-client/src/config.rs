use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_ENDPOINT: &str = "/api/get_packages";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Oraculo API
    pub api_url: String,
    /// Path of the package feed under `api_url`
    pub endpoint: String,
    /// Refresh period; `None` refreshes once and exits
    pub poll_interval: Option<Duration>,
    /// Client timeout; `None` lets a hung request wait forever
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let poll_secs = match lookup("FEED_POLL_INTERVAL_SECS") {
            Some(raw) => parse_secs("FEED_POLL_INTERVAL_SECS", &raw)?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        let request_timeout = lookup("FEED_REQUEST_TIMEOUT_SECS")
            .map(|raw| parse_secs("FEED_REQUEST_TIMEOUT_SECS", &raw))
            .transpose()?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            api_url: lookup("ORACULO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            endpoint: lookup("FEED_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            poll_interval: (poll_secs > 0).then(|| Duration::from_secs(poll_secs)),
            request_timeout,
        })
    }
}

fn parse_secs(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
