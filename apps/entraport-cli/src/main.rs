//! entraport - export directory users and group memberships to CSV.
//!
//! Reads the full user list from a Microsoft Graph-style directory service,
//! resolves each user's group memberships, and writes one CSV row per user
//! for offline auditing or reporting. The bearer token is taken from the
//! `ENTRAPORT_ACCESS_TOKEN` environment variable.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use entraport_cli::config::Config;
use entraport_cli::error::CliResult;
use entraport_cli::export;
use entraport_graph::GraphClient;

/// Export directory users and their group memberships to a CSV file
#[derive(Parser, Debug)]
#[command(name = "entraport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Destination file for the CSV export
    #[arg(short = 'o', long = "output", default_value = "user_groups.csv")]
    output: PathBuf,

    /// Override the Graph API base URL
    #[arg(long = "graph-url")]
    graph_url: Option<String>,
}

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            e.print();
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::from_env()?;

    let graph_url = cli
        .graph_url
        .or(config.graph_url)
        .unwrap_or_else(|| entraport_graph::DEFAULT_GRAPH_URL.to_string());

    let client = GraphClient::with_base_url(config.access_token, graph_url)?;

    let summary = export::run(&client, &cli.output).await?;
    tracing::info!("Export completed, {} users written", summary.users_exported);

    Ok(())
}
