//! Directory reader for Microsoft Graph-style directory services.
//!
//! Wraps the two read endpoints a directory export needs: the paginated
//! user listing and the per-user `memberOf` membership lookup. All calls
//! are read-only and authenticated with a caller-supplied bearer token.
//!
//! # Example
//!
//! ```no_run
//! use entraport_graph::{fetch_all_users, fetch_member_groups, GraphClient};
//! use secrecy::SecretString;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GraphClient::new(SecretString::from("token".to_string()))?;
//!
//! for user in fetch_all_users(&client).await? {
//!     let groups = fetch_member_groups(&client, &user.id).await?;
//!     println!("{}: {}", user.display_name, groups.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod groups;
mod users;

// Re-exports
pub use client::{GraphClient, ODataPage, DEFAULT_GRAPH_URL};
pub use error::{GraphError, GraphResult};
pub use groups::fetch_member_groups;
pub use users::{fetch_all_users, DirectoryUser};
