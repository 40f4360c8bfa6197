//! `revertnet gaps`: compare seniority-gap distributions.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::application::AnalysisPipeline;
use crate::cli::display::format::format_seniority;
use crate::cli::display::render_histogram;
use crate::services::{AbbaDetector, GapComparison};

#[derive(Serialize)]
struct GapsOutput<'a> {
    abba_gaps: &'a [f64],
    other_gaps: &'a [f64],
    comparison: GapComparison,
}

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
        let output = GapsOutput {
            abba_gaps: &report.abba_gaps,
            other_gaps: &report.other_gaps,
            comparison: report.comparison,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", report.comparison.summary());
        println!(
            "\nAB-BA edges: {} (mean gap {}), other edges: {} (mean gap {})\n",
            report.abba_edges.len(),
            format_seniority(report.comparison.abba_mean),
            report.other_edges.len(),
            format_seniority(report.comparison.other_mean),
        );
        println!(
            "{}",
            render_histogram(
                &report.abba_gaps,
                &report.other_gaps,
                config.histogram.bins,
                config.histogram.bar_width,
            )
        );
    }
    Ok(())
}
