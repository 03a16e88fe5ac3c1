//! Cloud Controller HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::error::{CcError, Result};

/// Everything needed to issue a single API request
#[derive(Debug, Clone)]
pub struct RequestArguments {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub token: String,
    pub body: Option<serde_json::Value>,
    pub acceptable_status_codes: Vec<u16>,
}

impl RequestArguments {
    /// Start a request with no query, no body, and no acceptable status codes
    pub fn new(method: Method, path: impl Into<String>, token: &str) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            token: token.to_string(),
            body: None,
            acceptable_status_codes: Vec::new(),
        }
    }

    /// Replace the query pairs (order is preserved on the wire)
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Declare which response statuses count as success
    pub fn accept(mut self, codes: &[u16]) -> Self {
        self.acceptable_status_codes = codes.to_vec();
        self
    }
}

/// Cloud Controller API client
///
/// Cloning is cheap: clones share the underlying connection pool, which makes
/// a single client safe to hand to many concurrent dispatcher workers.
#[derive(Debug, Clone)]
pub struct CcClient {
    client: Client,
    config: Config,
    base_url: Url,
}

impl CcClient {
    /// Create a new client with pooled connections and the configured TLS policy
    pub fn new(config: Config) -> Result<Self> {
        let base_url = Url::parse(&config.host)
            .map_err(|e| CcError::InvalidUrl(format!("host '{}': {}", config.host, e)))?;

        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.skip_verify_ssl)
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the absolute URL for a path and ordered query pairs
    ///
    /// A path prefix on the configured host (e.g. a gateway mount) is kept.
    pub(crate) fn url(&self, path: &str, query: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{}/{}", prefix, path.trim_start_matches('/')));
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Issue a request and return the status and raw body
    ///
    /// Fails with [`CcError::Transport`] when the round trip itself fails and
    /// with [`CcError::UnexpectedStatus`] when the status is not acceptable.
    pub async fn execute(&self, args: RequestArguments) -> Result<(u16, Vec<u8>)> {
        let url = self.url(&args.path, &args.query);
        debug!("{} {}", args.method, url);

        let mut builder = self
            .client
            .request(args.method.clone(), url.clone())
            .header("Authorization", format!("bearer {}", args.token))
            .header("Content-Type", "application/json");
        if let Some(ref body) = args.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        if !args.acceptable_status_codes.contains(&status) {
            debug!("{} {} returned unexpected status {}", args.method, url, status);
            return Err(CcError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!("{} {} -> {} ({} bytes)", args.method, url, status, body.len());
        Ok((status, body))
    }

    /// Issue a request and decode the body as JSON
    pub async fn execute_json<T>(&self, args: RequestArguments) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (_, body) = self.execute(args).await?;
        decode(&body)
    }
}

/// Decode a response body, reporting schema mismatches as [`CcError::Decode`]
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(CcError::from)
}

#[cfg(test)]
impl CcClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        match Self::new(Config::new(base_url)) {
            Ok(client) => client,
            Err(e) => panic!("failed to build test client: {}", e),
        }
    }
}
