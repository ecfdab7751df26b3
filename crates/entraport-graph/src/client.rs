//! HTTP client for the directory service, with cursor pagination.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{GraphError, GraphResult};

/// Default Graph API endpoint.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com/v1.0";

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `OData` error response from the directory service.
#[derive(Debug, Deserialize)]
struct ODataError {
    error: ODataErrorBody,
}

/// `OData` error body.
#[derive(Debug, Deserialize)]
struct ODataErrorBody {
    code: String,
    message: String,
}

/// One page of a paginated directory response.
///
/// The continuation link is an opaque URL; a page without one is the last.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ODataPage<T> {
    #[serde(default)]
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

/// Directory API client holding a caller-supplied bearer token.
#[derive(Debug)]
pub struct GraphClient {
    http_client: reqwest::Client,
    access_token: SecretString,
    base_url: String,
}

impl GraphClient {
    /// Creates a client against the public Graph endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(access_token: SecretString) -> GraphResult<Self> {
        Self::with_base_url(access_token, DEFAULT_GRAPH_URL)
    }

    /// Creates a client against a custom base URL (sovereign clouds, tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_base_url(
        access_token: SecretString,
        base_url: impl Into<String>,
    ) -> GraphResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GraphError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            access_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request with the bearer token attached.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> GraphResult<T> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.access_token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(GraphError::from);
        }

        let error_body = response.text().await.unwrap_or_default();
        if let Ok(odata_error) = serde_json::from_str::<ODataError>(&error_body) {
            return Err(GraphError::Api {
                status: status.as_u16(),
                code: odata_error.error.code,
                message: odata_error.error.message,
            });
        }

        Err(GraphError::Api {
            status: status.as_u16(),
            code: status.to_string(),
            message: error_body,
        })
    }

    /// Fetches every page of a paginated response, handing each page's
    /// entries to the callback in delivery order.
    ///
    /// Follows the `@odata.nextLink` of each response verbatim until a
    /// response carries none. There is no page cap and no cycle detection;
    /// a service looping its continuation links would iterate forever.
    #[instrument(skip(self, callback))]
    pub async fn get_paginated<T, F>(&self, initial_url: &str, mut callback: F) -> GraphResult<()>
    where
        T: DeserializeOwned,
        F: FnMut(Vec<T>),
    {
        let mut url = initial_url.to_string();

        loop {
            debug!("Fetching page: {}", url);
            let page: ODataPage<T> = self.get(&url).await?;

            callback(page.value);

            match page.next_link {
                Some(next) => url = next,
                None => return Ok(()),
            }
        }
    }
}
