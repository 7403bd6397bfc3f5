use std::time::Duration;

/// Backend URL used when `CINEWEB_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Request timeout used when `CINEWEB_REQUEST_TIMEOUT_SECS` is not set.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
///
/// | Env Var                        | Default                 |
/// |--------------------------------|-------------------------|
/// | `CINEWEB_API_URL`              | `http://localhost:3000` |
/// | `CINEWEB_REQUEST_TIMEOUT_SECS` | `30`                    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend REST API.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ClientConfig {
    /// Load configuration from the process environment with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("CINEWEB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let api_url = api_url.trim().trim_end_matches('/').to_string();

        let scheme_ok = reqwest::Url::parse(&api_url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !scheme_ok {
            return Err(ConfigError::Invalid {
                var: "CINEWEB_API_URL",
                expected: "http(s) URL",
                value: api_url,
            });
        }

        let request_timeout_secs = match lookup("CINEWEB_REQUEST_TIMEOUT_SECS") {
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    var: "CINEWEB_REQUEST_TIMEOUT_SECS",
                    expected: "positive number of seconds",
                    value: raw,
                })?,
        };

        Ok(Self {
            api_url,
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
