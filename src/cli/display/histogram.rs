//! Terminal density histogram for comparing two gap distributions.
//!
//! Both series share one binning over their combined range, so the bars
//! overlap the way a plotted comparison would.

use console::style;

/// A binned density estimate of one numeric series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Inclusive lower edge of the first bin.
    pub min: f64,
    /// Width of each bin.
    pub bin_width: f64,
    /// Normalized density per bin (integrates to 1 over the range).
    pub densities: Vec<f64>,
    /// Raw count per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins over `[min, max]`.
    ///
    /// The top edge is inclusive so the maximum value lands in the last
    /// bin. An empty series yields all-zero densities.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_values(values: &[f64], bins: usize, min: f64, max: f64) -> Self {
        let range = max - min;
        let bin_width = if range > 0.0 { range / bins as f64 } else { 1.0 };
        let mut counts = vec![0_usize; bins];

        for &value in values {
            let mut index = ((value - min) / bin_width) as usize;
            if index >= bins {
                index = bins - 1;
            }
            counts[index] += 1;
        }

        let total = values.len();
        let densities = counts
            .iter()
            .map(|&c| {
                if total == 0 {
                    0.0
                } else {
                    c as f64 / (total as f64 * bin_width)
                }
            })
            .collect();

        Self {
            min,
            bin_width,
            densities,
            counts,
        }
    }
}

/// Shared range of two series, falling back to a unit range when both are
/// empty or degenerate.
fn combined_range(a: &[f64], b: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in a.iter().chain(b.iter()) {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        // All values identical: widen so the single bin has width.
        return (min, min + 1.0);
    }
    (min, max)
}

/// Render the overlapping density histograms of two gap distributions.
pub fn render_histogram(abba: &[f64], other: &[f64], bins: usize, bar_width: usize) -> String {
    let (min, max) = combined_range(abba, other);
    let abba_hist = Histogram::from_values(abba, bins, min, max);
    let other_hist = Histogram::from_values(other, bins, min, max);

    let peak = abba_hist
        .densities
        .iter()
        .chain(other_hist.densities.iter())
        .fold(0.0_f64, |acc, &d| acc.max(d));

    let mut out = String::new();
    out.push_str(&format!(
        "Absolute seniority difference, density per bin ({} = AB-BA, {} = other)\n",
        style("█").cyan(),
        style("█").yellow()
    ));

    for bin in 0..bins {
        let lo = min + abba_hist.bin_width * bin as f64;
        let hi = lo + abba_hist.bin_width;
        out.push_str(&format!(
            "[{lo:6.3}, {hi:6.3}{} {} {:.3}\n",
            if bin + 1 == bins { "]" } else { ")" },
            style(bar(abba_hist.densities[bin], peak, bar_width)).cyan(),
            abba_hist.densities[bin],
        ));
        out.push_str(&format!(
            "                {} {:.3}\n",
            style(bar(other_hist.densities[bin], peak, bar_width)).yellow(),
            other_hist.densities[bin],
        ));
    }
    out
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(density: f64, peak: f64, width: usize) -> String {
    if peak <= 0.0 {
        return String::new();
    }
    let cells = ((density / peak) * width as f64).round() as usize;
    "█".repeat(cells.min(width))
}
