use std::time::Duration;

/// Configuration constants for the Cloud Controller API
pub mod api {
    /// Base path for Cloud Controller API v2
    pub const BASE_PATH: &str = "/v2";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Spaces endpoint
    pub const SPACES: &str = "spaces";

    /// Applications endpoint
    pub const APPS: &str = "apps";

    /// Page size the server uses unless told otherwise
    pub const DEFAULT_PAGE_SIZE: u32 = 50;

    /// Status expected from list and get requests
    pub const STATUS_OK: u16 = 200;

    /// Status expected from create and associate requests
    pub const STATUS_CREATED: u16 = 201;

    /// Status expected from delete and dissociate requests
    pub const STATUS_NO_CONTENT: u16 = 204;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["CC_TOKEN", "UAA_TOKEN"];
}

/// Default values for CLI and client
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default number of concurrent workers for bulk operations
    pub const WORKERS: usize = 10;

    /// Default request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Default connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Connection settings for a Cloud Controller
///
/// Passed by value to [`crate::CcClient::new`]; nothing is held in global state,
/// so independent clients can talk to different hosts from the same process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the API, e.g. `https://api.example.com`
    pub host: String,
    /// Accept invalid TLS certificates (self-signed test environments)
    pub skip_verify_ssl: bool,
    /// Total time allowed for a single request
    pub timeout: Duration,
    /// Time allowed to establish a connection
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration with default TLS policy and timeouts
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            skip_verify_ssl: false,
            timeout: Duration::from_secs(defaults::TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
        }
    }

    /// Toggle TLS certificate verification
    pub fn skip_verify_ssl(mut self, skip: bool) -> Self {
        self.skip_verify_ssl = skip;
        self
    }

    /// Override the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
        assert!(!api::BASE_PATH.ends_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(credentials::TOKEN_ENV_VARS, &["CC_TOKEN", "UAA_TOKEN"]);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("https://api.example.com");
        assert_eq!(config.host, "https://api.example.com");
        assert!(!config.skip_verify_ssl);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new("https://api.example.com")
            .skip_verify_ssl(true)
            .timeout(Duration::from_secs(5));
        assert!(config.skip_verify_ssl);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
