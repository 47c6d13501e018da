//! Client configuration read from the environment.
//!
//! | Variable            | Default                 |
//! |---------------------|-------------------------|
//! | `TODO_API_URL`      | `http://127.0.0.1:3000` |
//! | `TODO_USER_ID`      | `2048`                  |
//! | `TODO_TIMEOUT_SECS` | unset (no timeout)      |

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::types::{UserId, DEFAULT_USER_ID};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

pub const ENV_BASE_URL: &str = "TODO_API_URL";
pub const ENV_USER_ID: &str = "TODO_USER_ID";
pub const ENV_TIMEOUT_SECS: &str = "TODO_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub user_id: UserId,
    /// Per-request timeout applied by the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config = config.with_base_url(&url)?;
        }
        if let Some(raw) = get(ENV_USER_ID) {
            config.user_id = parse_u64(ENV_USER_ID, &raw)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = parse_u64(ENV_TIMEOUT_SECS, &raw)?;
            if secs == 0 {
                return Err(ConfigError::Zero {
                    key: ENV_TIMEOUT_SECS,
                });
            }
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let invalid = |reason: String| ConfigError::InvalidUrl {
            value: trimmed.to_string(),
            reason,
        };
        let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }
}

fn parse_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}
