//! API token resolution from multiple sources
//!
//! Tokens are opaque bearer strings obtained elsewhere (e.g. from a UAA
//! login); this module only finds one.

use log::debug;

use crate::config::credentials;
use crate::error::{CcError, Result};

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (CC_TOKEN, UAA_TOKEN - in order)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        self.resolve_from(cli_token, |name| std::env::var(name).ok())
    }

    fn resolve_from<F>(&self, cli_token: Option<&str>, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Some(token) = lookup(env_var).filter(|t| !t.is_empty()) {
                debug!("Using token from {} environment variable", env_var);
                return Ok(token);
            }
        }

        Err(CcError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      ccctl --token <TOKEN>\n\
             2. Environment var:   export CC_TOKEN=<TOKEN>  (also: UAA_TOKEN)\n\
             \n\
             Checked: env vars [{}]",
            self.host, env_vars
        )
    }
}
