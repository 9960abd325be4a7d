//! Client configuration, read from the process environment.

use std::time::Duration;

use crate::currency::CurrencyFormat;
use crate::error::ApiError;

const ENV_API_URL: &str = "FOOD_API_URL";
const ENV_TIMEOUT_SECS: &str = "FOOD_API_TIMEOUT_SECS";
const ENV_CURRENCY: &str = "FOOD_API_CURRENCY";

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Default timeout for API requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub currency: CurrencyFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            currency: CurrencyFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Build a config from `FOOD_API_URL`, `FOOD_API_TIMEOUT_SECS` and
    /// `FOOD_API_CURRENCY`. Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Some(url) = read_env(ENV_API_URL) {
            config.base_url = url;
        }

        if let Some(raw) = read_env(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .parse()
                .map_err(|_| ApiError::InvalidConfig(format!("{ENV_TIMEOUT_SECS}={raw}")))?;
            if secs == 0 {
                return Err(ApiError::InvalidConfig(format!(
                    "{ENV_TIMEOUT_SECS} must be positive"
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(tag) = read_env(ENV_CURRENCY) {
            config.currency = CurrencyFormat::from_locale(&tag)
                .ok_or_else(|| ApiError::InvalidConfig(format!("unknown currency locale {tag}")))?;
        }

        Ok(config)
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
