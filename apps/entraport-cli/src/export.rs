//! CSV export of directory users and their group memberships.

use std::path::Path;

use tracing::{info, warn};

use entraport_graph::{fetch_all_users, fetch_member_groups, DirectoryUser, GraphClient};

use crate::error::CliResult;

/// Fixed header row of the export file.
pub const CSV_HEADER: [&str; 5] = ["User Name", "Email", "User ID", "Groups", "Active State"];

/// Outcome of a completed export run.
#[derive(Debug)]
pub struct ExportSummary {
    /// Number of user rows written, excluding the header.
    pub users_exported: usize,
}

/// Exports every directory user and their group memberships to `output`.
///
/// The user listing is fetched in full before the destination file is
/// created, so a failed listing leaves the filesystem untouched. A failed
/// group lookup degrades that user's Groups field to empty and the run
/// continues. I/O failures abort the run; rows already flushed stay on disk.
pub async fn run(client: &GraphClient, output: &Path) -> CliResult<ExportSummary> {
    info!("Retrieving all users");
    let users = fetch_all_users(client).await?;
    info!("Total users retrieved: {}", users.len());

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(CSV_HEADER)?;

    for user in &users {
        info!("Processing user: {}", user.display_name);

        let groups = match fetch_member_groups(client, &user.id).await {
            Ok(groups) => groups,
            Err(e) => {
                warn!("Failed to fetch groups for user {}: {}", user.id, e);
                Vec::new()
            }
        };

        writer.write_record(csv_row(user, &groups))?;
    }

    writer.flush()?;
    info!("User details exported to {}", output.display());

    Ok(ExportSummary {
        users_exported: users.len(),
    })
}

/// Renders the five-field output row for one user.
fn csv_row(user: &DirectoryUser, groups: &[String]) -> [String; 5] {
    [
        user.display_name.clone(),
        user.mail.clone().unwrap_or_default(),
        user.id.clone(),
        groups.join(", "),
        if user.account_enabled {
            "True".to_string()
        } else {
            "False".to_string()
        },
    ]
}
