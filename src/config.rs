use std::env;
use std::time::Duration;

use crate::pagination::PagingPolicy;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.data.world";
pub(crate) const API_VERSION: &str = "/v0";

/// Time budget for one full round-trip, from connection to last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const HOST_VAR: &str = "DW_API_HOST";
const ENVIRONMENT_VAR: &str = "DW_ENVIRONMENT";

/// Connection settings for a [`Client`](crate::client::Client).
///
/// The process environment is consulted here, once, at construction time.
/// The client itself never reads environment variables, so tests and
/// embedders can inject everything.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Verbatim base URL override, e.g. a staging host or a local mock.
    pub api_host: Option<String>,
    /// Named deployment, resolved to `https://api.<environment>.data.world`.
    pub environment: Option<String>,
    /// Round-trip timeout installed on the HTTP client.
    pub timeout: Duration,
    /// Pacing and bounds for paginated listings.
    pub paging: PagingPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_host: None,
            environment: None,
            timeout: DEFAULT_TIMEOUT,
            paging: PagingPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Settings taken from `DW_API_HOST` and `DW_ENVIRONMENT`.
    ///
    /// An empty value counts as unset.
    pub fn from_env() -> Self {
        ClientConfig {
            api_host: env_nonempty(HOST_VAR),
            environment: env_nonempty(ENVIRONMENT_VAR),
            ..ClientConfig::default()
        }
    }

    /// The versioned URL every endpoint path is appended to.
    ///
    /// A host override wins over a named environment; the `/v0` segment
    /// is appended in all cases.
    pub fn base_url(&self) -> String {
        let root = if let Some(host) = &self.api_host {
            host.clone()
        } else if let Some(environment) = &self.environment {
            format!("https://api.{}.data.world", environment)
        } else {
            DEFAULT_BASE_URL.to_string()
        };

        format!("{}{}", root, API_VERSION)
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_the_production_host() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url(), "https://api.data.world/v0");
    }

    #[test]
    fn base_url_resolves_a_named_environment() {
        let config = ClientConfig {
            environment: Some("sparklesquad".to_string()),
            ..ClientConfig::default()
        };

        assert_eq!(config.base_url(), "https://api.sparklesquad.data.world/v0");
    }

    #[test]
    fn base_url_prefers_the_host_override() {
        let config = ClientConfig {
            api_host: Some("http://localhost:1010".to_string()),
            environment: Some("sparklesquad".to_string()),
            ..ClientConfig::default()
        };

        assert_eq!(config.base_url(), "http://localhost:1010/v0");
    }

    #[test]
    fn default_timeout_is_one_minute() {
        assert_eq!(ClientConfig::default().timeout, Duration::from_secs(60));
    }
}
