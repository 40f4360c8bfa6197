//! CLI layer: command definitions, dispatch, and display helpers.

pub mod commands;
pub mod display;
pub mod types;

use tracing::error;

pub use types::{Cli, Commands};

/// Print a command error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    error!(error = ?err, "command failed");
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
