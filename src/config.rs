//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{PmError, Result};

/// Production API host.
pub const DEFAULT_API_URL: &str = "https://api.projectmanager.com/";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const ENV_API_KEY: &str = "PM_API_KEY";
const ENV_API_URL: &str = "PM_API_URL";
const ENV_TIMEOUT_SECS: &str = "PM_TIMEOUT_SECS";

/// Settings shared by every call made through a client.
///
/// Read-only once the client is built.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: Url,
    timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Build a configuration for the given API key and base URL.
    ///
    /// The base URL is normalized to end with `/` so relative paths join
    /// beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or the base URL is invalid.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(PmError::InvalidConfig("API key must not be empty".to_string()));
        }

        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: Url::parse(&base_url_str)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read configuration from environment variables.
    ///
    /// - `PM_API_KEY` (required)
    /// - `PM_API_URL` (optional, defaults to [`DEFAULT_API_URL`])
    /// - `PM_TIMEOUT_SECS` (optional, defaults to 300)
    ///
    /// # Errors
    ///
    /// Returns an error if `PM_API_KEY` is not set or a value is malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY).ok_or_else(|| {
            PmError::ConfigMissing(format!("{ENV_API_KEY} environment variable not set"))
        })?;
        let base_url = lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(&api_key, &base_url)?;

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PmError::InvalidConfig(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got '{raw}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let a = ClientConfig::new("key", "https://api.projectmanager.com").unwrap();
        let b = ClientConfig::new("key", "https://api.projectmanager.com/").unwrap();
        assert_eq!(a.base_url().as_str(), b.base_url().as_str());
    }

    #[test]
    fn test_blank_key_rejected() {
        let err = ClientConfig::new("  ", DEFAULT_API_URL).unwrap_err();
        assert!(matches!(err, PmError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = ClientConfig::new("key", "not a url").unwrap_err();
        assert!(matches!(err, PmError::Url(_)));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[("PM_API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.base_url().as_str(), DEFAULT_API_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("PM_API_KEY", "secret"),
            ("PM_API_URL", "http://localhost:8080"),
            ("PM_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, PmError::ConfigMissing(_)));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            ("PM_API_KEY", "secret"),
            ("PM_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, PmError::InvalidConfig(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = ClientConfig::new("top-secret", DEFAULT_API_URL).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("top-secret"));
    }
}
