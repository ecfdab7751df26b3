//! CLI error types.

use thiserror::Error;

use entraport_graph::GraphError;

/// Result type alias using `CliError`.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that terminate an export run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory request failed: {0}")]
    Graph(#[from] GraphError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Prints the error to stderr with appropriate formatting.
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }
    }
}
