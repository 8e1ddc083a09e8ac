use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Validated connection settings for one AWX instance
///
/// Built once at process start and handed to [`AwxApiClient`](crate::awx::AwxApiClient).
#[derive(Clone, Serialize, Deserialize)]
pub struct AwxConfig {
    /// AWX base URL without trailing slash (e.g. `https://awx.example.com`)
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl fmt::Debug for AwxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwxConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"********")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Config file layout (`~/.awx-mcp.toml`)
///
/// ```toml
/// [awx]
/// url = "https://awx.example.com"
/// username = "admin"
/// password = "secret"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub awx: PartialConfig,
}

/// Connection settings from one source, any of which may be missing
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for PartialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl PartialConfig {
    /// Read `AWX_URL`, `AWX_USERNAME`, `AWX_PASSWORD` and `AWX_TIMEOUT` through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup("AWX_URL"),
            username: lookup("AWX_USERNAME"),
            password: lookup("AWX_PASSWORD"),
            timeout_secs: lookup("AWX_TIMEOUT").and_then(|t| t.trim().parse().ok()),
        }
    }

    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win
    pub fn merge(self, overrides: PartialConfig) -> PartialConfig {
        PartialConfig {
            url: overrides.url.or(self.url),
            username: overrides.username.or(self.username),
            password: overrides.password.or(self.password),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Validate and produce the final configuration
    pub fn into_config(self) -> Result<AwxConfig, ConfigError> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let (Some(url), Some(username), Some(password)) = (
            non_empty(self.url),
            non_empty(self.username),
            non_empty(self.password),
        ) else {
            return Err(ConfigError::MissingCredentials);
        };

        let base_url = url.trim().trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: base_url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(AwxConfig {
            base_url,
            username,
            password,
            timeout_secs,
        })
    }
}
