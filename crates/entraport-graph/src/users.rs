//! User listing from the directory service.

use tracing::{debug, info, instrument};

use crate::{GraphClient, GraphResult};

/// A user record as returned by the directory's user-listing endpoint.
///
/// Parsing is total: attributes the service omits fall back to defaults, so
/// every listed entry produces exactly one record and the export's row count
/// always matches the listing.
#[derive(Debug, Clone)]
pub struct DirectoryUser {
    /// Object ID issued by the directory service.
    pub id: String,
    /// Display name, may be empty.
    pub display_name: String,
    /// Primary email address.
    pub mail: Option<String>,
    /// Whether the account is enabled. Entries without the attribute count
    /// as enabled.
    pub account_enabled: bool,
}

impl DirectoryUser {
    /// Parses a user from one element of the user-list response.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self {
            id: value
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            display_name: value
                .get("displayName")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            mail: value.get("mail").and_then(|v| v.as_str()).map(String::from),
            account_enabled: value
                .get("accountEnabled")
                .and_then(|v| v.as_bool())
                .unwrap_or(true),
        }
    }
}

/// Fetches every user in the directory.
///
/// Pages are requested one at a time, following the service's continuation
/// links until none is supplied; entries keep the service's return order
/// both within and across pages.
#[instrument(skip(client))]
pub async fn fetch_all_users(client: &GraphClient) -> GraphResult<Vec<DirectoryUser>> {
    info!("Starting user listing");

    let url = format!("{}/users", client.base_url());
    let mut all_users = Vec::new();

    client
        .get_paginated(&url, |page: Vec<serde_json::Value>| {
            debug!("Processing page with {} users", page.len());
            all_users.extend(page.iter().map(DirectoryUser::from_json));
        })
        .await?;

    info!("User listing completed, {} users retrieved", all_users.len());

    Ok(all_users)
}
