//! CLI type definitions.
//!
//! Clap command structures that define the revertnet command surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "revertnet")]
#[command(about = "Revert-network analyzer for collaborative edit logs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize project configuration
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Build the revert network and print its edges and size
    Network {
        /// Path to the tab-separated revert log
        log: PathBuf,
    },

    /// Detect AB-BA reciprocal revert sequences
    Abba {
        /// Path to the tab-separated revert log
        log: PathBuf,

        /// Reciprocal-response window in hours (overrides config)
        #[arg(short, long)]
        window_hours: Option<i64>,
    },

    /// Compare seniority-gap distributions of reciprocal vs other reverts
    Gaps {
        /// Path to the tab-separated revert log
        log: PathBuf,

        /// Reciprocal-response window in hours (overrides config)
        #[arg(short, long)]
        window_hours: Option<i64>,

        /// Number of histogram bins (overrides config)
        #[arg(short, long)]
        bins: Option<usize>,
    },

    /// Run the full pipeline: network, AB-BA detection, gap comparison
    Analyze {
        /// Path to the tab-separated revert log
        log: PathBuf,

        /// Reciprocal-response window in hours (overrides config)
        #[arg(short, long)]
        window_hours: Option<i64>,

        /// Number of histogram bins (overrides config)
        #[arg(short, long)]
        bins: Option<usize>,
    },
}
