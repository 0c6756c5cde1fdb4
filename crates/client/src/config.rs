//! Client configuration.

use std::{env, time::Duration};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Settings for the shared HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL; endpoint paths are appended to it.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub access_token: Option<String>,
    /// Total time allowed per request (default: 30s)
    pub timeout: Duration,
    /// Time allowed to establish a connection (default: 10s)
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("chatline-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CHATLINE_URL` - API base URL (default: "http://localhost:8080/api/v1")
    /// - `CHATLINE_TOKEN` - Bearer token (default: none)
    /// - `CHATLINE_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    /// - `CHATLINE_CONNECT_TIMEOUT_SECS` - Connect timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seconds = |key: &str| {
            lookup(key)
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
        };

        let defaults =
            Self::new(lookup("CHATLINE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));

        Self {
            access_token: lookup("CHATLINE_TOKEN").filter(|token| !token.is_empty()),
            timeout: seconds("CHATLINE_TIMEOUT_SECS").unwrap_or(defaults.timeout),
            connect_timeout: seconds("CHATLINE_CONNECT_TIMEOUT_SECS")
                .unwrap_or(defaults.connect_timeout),
            ..defaults
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = ClientConfig::from_lookup(lookup(&[]));

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.access_token, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("chatline-client/"));
    }

    #[test]
    fn test_values_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CHATLINE_URL", "https://chat.example.com/api"),
            ("CHATLINE_TOKEN", "secret"),
            ("CHATLINE_TIMEOUT_SECS", "5"),
            ("CHATLINE_CONNECT_TIMEOUT_SECS", "2"),
        ]));

        assert_eq!(config.base_url, "https://chat.example.com/api");
        assert_eq!(config.access_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_unparseable_timeout_uses_default() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CHATLINE_TIMEOUT_SECS", "soon"),
            ("CHATLINE_TOKEN", ""),
        ]));

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.access_token, None);
    }
}
