//! `revertnet analyze`: the full pipeline in one report.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::application::AnalysisPipeline;
use crate::cli::display::{edge_table, render_histogram};
use crate::services::AbbaDetector;

pub fn execute(
    log: &Path,
    window_hours: Option<i64>,
    bins: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = super::effective_config(window_hours, bins)?;
    let records = super::load_records(log)?;

    let pipeline =
        AnalysisPipeline::new(AbbaDetector::with_window_hours(config.analysis.window_hours));
    let report = pipeline.run(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", style("Revert network").bold());
    if report.network.edge_count > 0 {
        println!("{}", edge_table(&report.network.edges));
    }
    println!("{}\n", report.network.summary());

    println!("{}", style("AB-BA sequences").bold());
    println!("{}", report.abba.summary());
    if !report.abba.involved.is_empty() {
        println!("\nInitiating edges:");
        println!("{}", edge_table(&report.abba.involved));
    }
    println!();

    println!("{}", style("Seniority gaps").bold());
    println!("{}\n", report.comparison.summary());
    println!(
        "{}",
        render_histogram(
            &report.abba_gaps,
            &report.other_gaps,
            config.histogram.bins,
            config.histogram.bar_width,
        )
    );
    Ok(())
}
