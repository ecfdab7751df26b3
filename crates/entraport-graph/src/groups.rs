//! Group membership lookup for a single user.

use tracing::{debug, instrument};

use crate::client::ODataPage;
use crate::{GraphClient, GraphError, GraphResult};

/// Fetches the display names of the groups and directory roles a user
/// belongs to, in the service's return order.
///
/// Only the first page of the `memberOf` endpoint is read; memberships past
/// the service's default page size are not captured.
#[instrument(skip(client))]
pub async fn fetch_member_groups(client: &GraphClient, user_id: &str) -> GraphResult<Vec<String>> {
    let url = format!("{}/users/{}/memberOf", client.base_url(), user_id);

    let page: ODataPage<serde_json::Value> = client.get(&url).await?;
    debug!(
        "User {} has {} membership entries",
        user_id,
        page.value.len()
    );

    display_names(&page.value)
}

/// Extracts the `displayName` of each membership entry.
///
/// An entry with a missing or non-string `displayName` fails the whole
/// lookup; callers decide whether that degrades or aborts their run.
fn display_names(entries: &[serde_json::Value]) -> GraphResult<Vec<String>> {
    entries
        .iter()
        .map(|entry| {
            entry
                .get("displayName")
                .and_then(|v| v.as_str())
                .map(String::from)
                .ok_or_else(|| GraphError::MissingAttribute {
                    object_id: entry
                        .get("id")
                        .and_then(|v| v.as_str())
                        .unwrap_or("<unknown>")
                        .to_string(),
                    attribute: "displayName",
                })
        })
        .collect()
}
