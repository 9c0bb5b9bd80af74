//! Client configuration.

use std::time::Duration;

/// Default backend base URL, matching a local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent on every request.
pub const USER_AGENT: &str = concat!("Lobbydesk/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request, refresh calls included.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Creates a configuration pointing at `base_url`.
    ///
    /// A trailing slash is stripped so endpoint paths can always be
    /// joined with a leading slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a configuration from `LOBBYDESK_API_URL` and
    /// `LOBBYDESK_TIMEOUT_MS`, falling back to defaults for anything
    /// unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = std::env::var("LOBBYDESK_API_URL")
            .map_or_else(|_| Self::default(), Self::new);
        if let Ok(ms) = std::env::var("LOBBYDESK_TIMEOUT_MS")
            && let Ok(ms) = ms.parse::<u64>()
        {
            config.timeout = Duration::from_millis(ms);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_default_points_at_local_server() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
