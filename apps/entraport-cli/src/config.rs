//! Runtime configuration from the process environment.

use secrecy::SecretString;

use crate::error::{CliError, CliResult};

/// Environment variable holding the bearer token for the directory service.
pub const ACCESS_TOKEN_VAR: &str = "ENTRAPORT_ACCESS_TOKEN";

/// Environment variable overriding the Graph API base URL.
pub const GRAPH_URL_VAR: &str = "ENTRAPORT_GRAPH_URL";

/// Resolved runtime configuration.
#[derive(Debug)]
pub struct Config {
    /// Bearer token presented to the directory service.
    pub access_token: SecretString,
    /// Base URL override for the Graph API, if set.
    pub graph_url: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// The access token is required; its absence is a configuration error
    /// reported before any network call is attempted.
    pub fn from_env() -> CliResult<Self> {
        let access_token = std::env::var(ACCESS_TOKEN_VAR)
            .map_err(|_| CliError::Config(format!("{ACCESS_TOKEN_VAR} is not set")))?;

        if access_token.is_empty() {
            return Err(CliError::Config(format!("{ACCESS_TOKEN_VAR} is empty")));
        }

        Ok(Self {
            access_token: access_token.into(),
            graph_url: std::env::var(GRAPH_URL_VAR).ok(),
        })
    }
}
