//! `revertnet abba`: detect AB-BA reciprocal revert sequences.

use anyhow::Result;
use std::path::Path;

use crate::cli::display::edge_table;
use crate::services::{AbbaDetector, NetworkBuilder};

pub fn execute(log: &Path, window_hours: Option<i64>, json: bool) -> Result<()> {
    let config = super::effective_config(window_hours, None)?;
    let records = super::load_records(log)?;

    let network = NetworkBuilder::new().build(&records);
    let detector = AbbaDetector::with_window_hours(config.analysis.window_hours);
    let report = detector.detect(&network.edges);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
        if !report.involved.is_empty() {
            println!("\nInitiating edges:");
            println!("{}", edge_table(&report.involved));
        }
    }
    Ok(())
}
