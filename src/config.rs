use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SCRAPER_API_URL: &str = "http://api.scraperapi.com";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// The proxy renders the page before answering, so it gets a long timeout.
const DEFAULT_SCRAPER_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TELEGRAM_TIMEOUT_SECS: u64 = 10;

/// Process-wide settings, read once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub scraper_api_key: Option<String>,
    pub telegram_token: Option<String>,
    pub scraper_api_url: String,
    pub telegram_api_url: String,
    pub scraper_timeout: Duration,
    pub telegram_timeout: Duration,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper_api_key: None,
            telegram_token: None,
            scraper_api_url: DEFAULT_SCRAPER_API_URL.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            scraper_timeout: Duration::from_secs(DEFAULT_SCRAPER_TIMEOUT_SECS),
            telegram_timeout: Duration::from_secs(DEFAULT_TELEGRAM_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        Ok(Self {
            scraper_api_key: get("SCRAPER_API_KEY"),
            telegram_token: get("TELEGRAM_TOKEN"),
            scraper_api_url: get("SCRAPER_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.scraper_api_url),
            telegram_api_url: get("TELEGRAM_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.telegram_api_url),
            scraper_timeout: parse_secs("SCRAPER_TIMEOUT_SECS", get("SCRAPER_TIMEOUT_SECS"))?
                .unwrap_or(defaults.scraper_timeout),
            telegram_timeout: parse_secs("TELEGRAM_TIMEOUT_SECS", get("TELEGRAM_TIMEOUT_SECS"))?
                .unwrap_or(defaults.telegram_timeout),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
        })
    }
}

fn parse_secs(key: &'static str, value: Option<String>) -> Result<Option<Duration>, ConfigError> {
    match value {
        None => Ok(None),
        Some(v) => match v.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
            _ => Err(ConfigError::Invalid { key, value: v }),
        },
    }
}

